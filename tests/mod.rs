/// Integration tests for calc-builder
///
/// Tests are organized into logical groupings:
/// - editing: tree operations, drag and drop, pagination and pricing through the public API
/// - persistence: store contract shared by the memory and SQLite stores, routing
/// - commands: command handlers run against an in-memory store
mod commands;
mod editing;
mod persistence;
