use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Base URL prepended to short links, without a trailing slash
    pub public_url: String,
}
