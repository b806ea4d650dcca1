//! Diesel schema for board persistence.

diesel::table! {
    /// Kanban task records, one row per card.
    kanban_tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning user identifier.
        user_id -> Uuid,
        /// Card title.
        #[max_length = 255]
        title -> Varchar,
        /// Free-form card body.
        description -> Text,
        /// Task priority.
        #[max_length = 20]
        priority -> Varchar,
        /// Board column the task occupies.
        #[max_length = 20]
        status -> Varchar,
        /// Card colour as rendered by the client.
        #[max_length = 20]
        color -> Varchar,
        /// Name of the owning category, empty when uncategorised.
        #[max_length = 50]
        category -> Varchar,
        /// Optional due date.
        deadline -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Rank within the column.
        order_index -> Float8,
    }
}

diesel::table! {
    /// Category records, scoped per user.
    categories (id) {
        /// Category identifier.
        id -> Uuid,
        /// Owning user identifier.
        user_id -> Uuid,
        /// Category display name.
        #[max_length = 50]
        name -> Varchar,
        /// Category hex colour.
        #[max_length = 7]
        color -> Varchar,
    }
}
