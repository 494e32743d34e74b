//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned identifier.
        id -> Int4,
        /// Task title.
        title -> Text,
        /// Task description.
        description -> Text,
        /// Free-form status, empty when unset.
        status -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
