mod operations;
mod schemas;
mod security;
mod support;
