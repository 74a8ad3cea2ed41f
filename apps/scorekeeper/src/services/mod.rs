pub mod session;

pub use session::ScoreSession;
