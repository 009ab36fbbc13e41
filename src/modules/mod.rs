pub mod auth;
pub mod todos;
pub mod users;

pub use self::todos::model::Todo;
pub use self::users::model::User;
