//! Guild settings row model.

use diesel::prelude::*;

/// Database row for the `guild` table.
///
/// Every setting column is nullable; null means "use the default".
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::guild)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GuildRow {
    pub id: i64,
    pub prefix: Option<String>,
    pub locale: Option<String>,
    pub regional: Option<String>,
}
