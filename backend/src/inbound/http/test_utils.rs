//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::ports::{MockQuizQuery, MockTriviaCommand, MockTriviaQuery};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{configure, unknown_route};

/// Mocked driving ports; unset expectations fail the test when called.
#[derive(Default)]
pub struct MockPorts {
    pub trivia: MockTriviaQuery,
    pub commands: MockTriviaCommand,
    pub quiz: MockQuizQuery,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState::new(
            Arc::new(self.trivia),
            Arc::new(self.commands),
            Arc::new(self.quiz),
        )
    }
}

/// State whose only configured port is `trivia`.
pub fn state_with_trivia(trivia: MockTriviaQuery) -> HttpState {
    MockPorts {
        trivia,
        ..MockPorts::default()
    }
    .into_state()
}

/// Build the application as the server does, minus health and docs.
pub fn trivia_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
        .default_service(web::to(unknown_route))
}
