//! Diesel schema for account persistence.

diesel::table! {
    /// User accounts. Email addresses carry a unique index.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 100]
        username -> Varchar,
        /// Email address, unique across accounts.
        #[max_length = 255]
        email -> Varchar,
        /// Credential hash.
        password_hash -> Text,
        /// Optional avatar location.
        #[max_length = 255]
        avatar_url -> Nullable<Varchar>,
        /// Registration timestamp.
        created_at -> Timestamptz,
    }
}
