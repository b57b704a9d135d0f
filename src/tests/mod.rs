
mod queries;
