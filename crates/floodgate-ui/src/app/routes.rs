//! Routing definitions for the Floodgate UI.
use crate::core::bootstrap::InitialRoute;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/overview")]
    Overview,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<InitialRoute> for Route {
    fn from(route: InitialRoute) -> Self {
        match route {
            InitialRoute::Register => Self::Register,
            InitialRoute::Overview => Self::Overview,
            InitialRoute::Login => Self::Login,
        }
    }
}
