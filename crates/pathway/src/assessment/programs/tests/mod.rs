pub(super) mod common;
mod gates;
mod ranking;
