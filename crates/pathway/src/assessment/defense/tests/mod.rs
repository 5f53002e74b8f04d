mod common;
mod precedence;
