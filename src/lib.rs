pub mod config;
pub mod format;
pub mod server;
pub mod util; // doctestのためpubにする
pub mod youtube;
