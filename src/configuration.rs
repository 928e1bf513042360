use crate::schedule::Schedule;
use std::path::PathBuf;

pub trait Configuration: Clone + Send + Sync + 'static {
    fn password(&self) -> String;
    fn frontend_path(&self) -> PathBuf;
    fn database_url(&self) -> Option<String>;
    fn port(&self) -> String;
    /// The single source of the bookable time labels. Every surface that
    /// enumerates or validates labels must go through this value.
    fn schedule(&self) -> Schedule;
}
