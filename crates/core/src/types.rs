/// Primary keys of the `animes` table are PostgreSQL BIGSERIAL.
pub type DbId = i64;
