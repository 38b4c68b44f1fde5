pub mod encoding;
pub mod language;
pub mod loading;
pub mod presentation;
pub mod projection;
pub mod rendering;
