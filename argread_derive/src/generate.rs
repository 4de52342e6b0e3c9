mod reader;
mod slot;
