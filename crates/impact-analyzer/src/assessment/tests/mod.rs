mod common;
mod explanation;
