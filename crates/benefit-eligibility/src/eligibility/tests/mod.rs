mod common;
mod evaluation;
mod routing;
mod service;
