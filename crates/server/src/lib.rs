use db::DBService;

pub mod config;
pub mod error;
pub mod http;
pub mod routes;

#[cfg(test)]
mod test_support;

/// Shared handler state. Built once in `main` and handed to the router,
/// so every handler receives its dependencies explicitly.
#[derive(Clone)]
pub struct AppState {
    db: DBService,
}

impl AppState {
    pub fn new(db: DBService) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DBService {
        &self.db
    }
}
