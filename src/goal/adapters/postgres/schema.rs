//! Diesel schema for goal persistence.

diesel::table! {
    /// Goal records, one row per tracked intention.
    goals (id) {
        /// Goal identifier.
        id -> Uuid,
        /// Owning user identifier.
        user_id -> Uuid,
        /// Goal title.
        #[max_length = 255]
        title -> Varchar,
        /// Free-form description.
        description -> Text,
        /// Completion flag.
        is_completed -> Bool,
        /// Name of the owning category, empty when uncategorised.
        #[max_length = 50]
        category -> Varchar,
        /// Repetition cadence.
        #[max_length = 50]
        frequency -> Varchar,
        /// Target number of repetitions or units.
        target_count -> Int4,
        /// Progress so far.
        current_count -> Int4,
        /// How progress is measured.
        #[max_length = 20]
        kind -> Varchar,
        /// Optional due date.
        deadline -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
