/**
 * Entity Definitions
 *
 * Record shapes persisted in the document store. Field names are
 * camelCase on the wire and in the stored JSON.
 */

/// Question records
pub mod question;

/// Reply records
pub mod reply;

/// User records
pub mod user;

pub use question::Question;
pub use reply::Reply;
pub use user::User;
