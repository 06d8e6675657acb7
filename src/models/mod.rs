//! Data models for the console-link client library.
//!
//! Value types exchanged with the console: connection snapshots, privilege
//! specifications and the connection-creation request.

pub mod authentication_method;
pub mod connection;
pub mod create_connection;
pub mod field_mapping;
pub mod table_privileges;

pub use authentication_method::AuthenticationMethod;
pub use connection::Connection;
pub use create_connection::CreateConnection;
pub use field_mapping::FieldMapping;
pub use table_privileges::TablePrivileges;
