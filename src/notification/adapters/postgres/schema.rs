//! Diesel schema for notification persistence.

diesel::table! {
    /// Notification records, one row per delivered message.
    notifications (id) {
        /// Notification identifier.
        id -> Uuid,
        /// Recipient user identifier.
        user_id -> Uuid,
        /// Message shown to the user.
        message -> Text,
        /// Free-form kind label.
        #[max_length = 50]
        kind -> Varchar,
        /// Read flag.
        is_read -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
