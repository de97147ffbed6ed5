//! SQLite backend (feature `sqlite`).
//!
//! One database file holds any number of roadmaps in normalized tables:
//! `roadmaps`, `syllabi`, `modules`, `topics`, `plan_entries`, `progress`.
//! Saving is transactional (delete-then-insert for the aggregate's rows),
//! so a re-save replaces the stored aggregate atomically.  Loading
//! re-assembles the aggregate and runs `Roadmap::validate`, surfacing any
//! torn write as [`StoreError::Corrupt`].
//!
//! IDs are stored as canonical UUID strings, dates as ISO `YYYY-MM-DD`,
//! and timestamps as RFC 3339.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Connection;

use sp_core::{EntryId, ModuleId, ProgressId, RoadmapId, SyllabusId, TopicId};
use sp_model::{
    EntryStatus, InputMethod, PlanEntry, ProgressEntry, Roadmap, SessionKind, Syllabus,
    SyllabusModule, SyllabusStatus, SyllabusTopic,
};

use crate::error::{StoreError, StoreResult};
use crate::store::RoadmapStore;

/// Roadmap storage in a single SQLite database file.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// An in-memory database — handy for tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS roadmaps (
                 id         TEXT PRIMARY KEY,
                 created_at TEXT NOT NULL
             );
             CREATE TABLE IF NOT EXISTS syllabi (
                 id           TEXT PRIMARY KEY,
                 roadmap_id   TEXT NOT NULL,
                 name         TEXT NOT NULL,
                 exam_date    TEXT NOT NULL,
                 daily_hours  REAL NOT NULL,
                 input_method TEXT NOT NULL,
                 status       TEXT NOT NULL,
                 created_at   TEXT NOT NULL
             );
             CREATE TABLE IF NOT EXISTS modules (
                 id            TEXT PRIMARY KEY,
                 roadmap_id    TEXT NOT NULL,
                 syllabus_id   TEXT NOT NULL,
                 name          TEXT NOT NULL,
                 weightage     REAL NOT NULL,
                 difficulty    INTEGER NOT NULL,
                 priority_rank INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS topics (
                 id             TEXT PRIMARY KEY,
                 roadmap_id     TEXT NOT NULL,
                 module_id      TEXT NOT NULL,
                 name           TEXT NOT NULL,
                 required_hours REAL NOT NULL,
                 mastered       INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS plan_entries (
                 id              TEXT PRIMARY KEY,
                 roadmap_id      TEXT NOT NULL,
                 topic_id        TEXT NOT NULL,
                 seq             INTEGER NOT NULL,
                 date            TEXT NOT NULL,
                 allocated_hours REAL NOT NULL,
                 kind            TEXT NOT NULL,
                 status          TEXT NOT NULL,
                 generated_at    TEXT NOT NULL,
                 module_name     TEXT NOT NULL,
                 topic_name      TEXT NOT NULL
             );
             CREATE TABLE IF NOT EXISTS progress (
                 id             TEXT PRIMARY KEY,
                 roadmap_id     TEXT NOT NULL,
                 entry_id       TEXT NOT NULL,
                 date_completed TEXT NOT NULL,
                 hours_spent    REAL NOT NULL,
                 confidence     INTEGER NOT NULL
             );",
        )?;
        Ok(Self { conn })
    }

    fn exists(&self, id: RoadmapId) -> StoreResult<bool> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT 1 FROM roadmaps WHERE id = ?1")?;
        Ok(stmt.exists([id.0.to_string()])?)
    }
}

impl RoadmapStore for SqliteStore {
    fn save(&mut self, roadmap: &Roadmap) -> StoreResult<()> {
        let rid = roadmap.id.0.to_string();
        let tx = self.conn.unchecked_transaction()?;

        for table in ["roadmaps", "syllabi", "modules", "topics", "plan_entries", "progress"] {
            tx.execute(&format!("DELETE FROM {table} WHERE {} = ?1",
                if table == "roadmaps" { "id" } else { "roadmap_id" }), [&rid])?;
        }

        tx.execute(
            "INSERT INTO roadmaps (id, created_at) VALUES (?1, ?2)",
            rusqlite::params![rid, roadmap.created_at.to_rfc3339()],
        )?;

        let s = &roadmap.syllabus;
        tx.execute(
            "INSERT INTO syllabi \
             (id, roadmap_id, name, exam_date, daily_hours, input_method, status, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                s.id.0.to_string(),
                rid,
                s.name,
                s.exam_date.to_string(),
                s.daily_hours,
                s.input_method.as_str(),
                s.status.as_str(),
                s.created_at.to_rfc3339(),
            ],
        )?;

        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO modules \
                 (id, roadmap_id, syllabus_id, name, weightage, difficulty, priority_rank) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for m in &roadmap.modules {
                stmt.execute(rusqlite::params![
                    m.id.0.to_string(),
                    rid,
                    m.syllabus_id.0.to_string(),
                    m.name,
                    m.weightage,
                    m.difficulty,
                    m.priority_rank,
                ])?;
            }

            let mut stmt = tx.prepare_cached(
                "INSERT INTO topics \
                 (id, roadmap_id, module_id, name, required_hours, mastered) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for t in &roadmap.topics {
                stmt.execute(rusqlite::params![
                    t.id.0.to_string(),
                    rid,
                    t.module_id.0.to_string(),
                    t.name,
                    t.required_hours,
                    t.mastered as i64,
                ])?;
            }

            let mut stmt = tx.prepare_cached(
                "INSERT INTO plan_entries \
                 (id, roadmap_id, topic_id, seq, date, allocated_hours, kind, status, \
                  generated_at, module_name, topic_name) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            )?;
            for (seq, e) in roadmap.plan.iter().enumerate() {
                stmt.execute(rusqlite::params![
                    e.id.0.to_string(),
                    rid,
                    e.topic_id.0.to_string(),
                    seq as i64,
                    e.date.to_string(),
                    e.allocated_hours,
                    e.kind.as_str(),
                    e.status.as_str(),
                    e.generated_at.to_rfc3339(),
                    e.module_name,
                    e.topic_name,
                ])?;
            }

            let mut stmt = tx.prepare_cached(
                "INSERT INTO progress \
                 (id, roadmap_id, entry_id, date_completed, hours_spent, confidence) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for p in &roadmap.progress {
                stmt.execute(rusqlite::params![
                    p.id.0.to_string(),
                    rid,
                    p.entry_id.0.to_string(),
                    p.date_completed.to_string(),
                    p.hours_spent,
                    p.confidence,
                ])?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    fn load(&self, id: RoadmapId) -> StoreResult<Option<Roadmap>> {
        let rid = id.0.to_string();

        let created_at: Option<String> = self
            .conn
            .prepare_cached("SELECT created_at FROM roadmaps WHERE id = ?1")?
            .query_row([&rid], |row| row.get(0))
            .map(Some)
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(other),
            })?;
        let Some(created_at) = created_at else {
            return Ok(None);
        };

        let syllabus = self
            .conn
            .prepare_cached(
                "SELECT id, name, exam_date, daily_hours, input_method, status, created_at \
                 FROM syllabi WHERE roadmap_id = ?1",
            )?
            .query_row([&rid], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, f64>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, String>(6)?,
                ))
            })?;

        let syllabus = Syllabus {
            id:           SyllabusId(parse_uuid(&syllabus.0)?),
            name:         syllabus.1,
            exam_date:    parse_date(&syllabus.2)?,
            daily_hours:  syllabus.3,
            input_method: InputMethod::parse(&syllabus.4)
                .ok_or_else(|| corrupt("input_method", &syllabus.4))?,
            status:       SyllabusStatus::parse(&syllabus.5)
                .ok_or_else(|| corrupt("syllabus status", &syllabus.5))?,
            created_at:   parse_timestamp(&syllabus.6)?,
        };

        let modules = self
            .conn
            .prepare_cached(
                "SELECT id, syllabus_id, name, weightage, difficulty, priority_rank \
                 FROM modules WHERE roadmap_id = ?1 ORDER BY priority_rank",
            )?
            .query_map([&rid], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, f64>(3)?,
                    row.get::<_, u8>(4)?,
                    row.get::<_, u32>(5)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|(mid, sid, name, weightage, difficulty, priority_rank)| {
                Ok(SyllabusModule {
                    id: ModuleId(parse_uuid(&mid)?),
                    syllabus_id: SyllabusId(parse_uuid(&sid)?),
                    name,
                    weightage,
                    difficulty,
                    priority_rank,
                })
            })
            .collect::<StoreResult<Vec<_>>>()?;

        let topics = self
            .conn
            .prepare_cached(
                "SELECT id, module_id, name, required_hours, mastered \
                 FROM topics WHERE roadmap_id = ?1 ORDER BY rowid",
            )?
            .query_map([&rid], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, f64>(3)?,
                    row.get::<_, i64>(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|(tid, mid, name, required_hours, mastered)| {
                Ok(SyllabusTopic {
                    id: TopicId(parse_uuid(&tid)?),
                    module_id: ModuleId(parse_uuid(&mid)?),
                    name,
                    required_hours,
                    mastered: mastered != 0,
                })
            })
            .collect::<StoreResult<Vec<_>>>()?;

        let plan = self
            .conn
            .prepare_cached(
                "SELECT id, topic_id, date, allocated_hours, kind, status, generated_at, \
                        module_name, topic_name \
                 FROM plan_entries WHERE roadmap_id = ?1 ORDER BY seq",
            )?
            .query_map([&rid], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, f64>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, String>(6)?,
                    row.get::<_, String>(7)?,
                    row.get::<_, String>(8)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|(eid, tid, date, hours, kind, status, generated_at, module_name, topic_name)| {
                Ok(PlanEntry {
                    id: EntryId(parse_uuid(&eid)?),
                    topic_id: TopicId(parse_uuid(&tid)?),
                    date: parse_date(&date)?,
                    allocated_hours: hours,
                    kind: SessionKind::parse(&kind).ok_or_else(|| corrupt("session kind", &kind))?,
                    status: EntryStatus::parse(&status)
                        .ok_or_else(|| corrupt("entry status", &status))?,
                    generated_at: parse_timestamp(&generated_at)?,
                    module_name,
                    topic_name,
                })
            })
            .collect::<StoreResult<Vec<_>>>()?;

        let progress = self
            .conn
            .prepare_cached(
                "SELECT id, entry_id, date_completed, hours_spent, confidence \
                 FROM progress WHERE roadmap_id = ?1 ORDER BY rowid",
            )?
            .query_map([&rid], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, f64>(3)?,
                    row.get::<_, u8>(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|(pid, eid, date_completed, hours_spent, confidence)| {
                Ok(ProgressEntry {
                    id: ProgressId(parse_uuid(&pid)?),
                    entry_id: EntryId(parse_uuid(&eid)?),
                    date_completed: parse_date(&date_completed)?,
                    hours_spent,
                    confidence,
                })
            })
            .collect::<StoreResult<Vec<_>>>()?;

        let roadmap = Roadmap {
            id,
            syllabus,
            modules,
            topics,
            plan,
            progress,
            created_at: parse_timestamp(&created_at)?,
        };
        roadmap
            .validate()
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        Ok(Some(roadmap))
    }

    fn list(&self) -> StoreResult<Vec<RoadmapId>> {
        self.conn
            .prepare_cached("SELECT id FROM roadmaps")?
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|s| Ok(RoadmapId(parse_uuid(&s)?)))
            .collect()
    }

    fn delete(&mut self, id: RoadmapId) -> StoreResult<bool> {
        if !self.exists(id)? {
            return Ok(false);
        }
        let rid = id.0.to_string();
        let tx = self.conn.unchecked_transaction()?;
        for table in ["syllabi", "modules", "topics", "plan_entries", "progress"] {
            tx.execute(&format!("DELETE FROM {table} WHERE roadmap_id = ?1"), [&rid])?;
        }
        tx.execute("DELETE FROM roadmaps WHERE id = ?1", [&rid])?;
        tx.commit()?;
        Ok(true)
    }

    fn set_entry_status(
        &mut self,
        roadmap: RoadmapId,
        entry: EntryId,
        status: EntryStatus,
    ) -> StoreResult<()> {
        if !self.exists(roadmap)? {
            return Err(StoreError::UnknownRoadmap(roadmap));
        }
        let changed = self.conn.execute(
            "UPDATE plan_entries SET status = ?1 WHERE id = ?2 AND roadmap_id = ?3",
            rusqlite::params![status.as_str(), entry.0.to_string(), roadmap.0.to_string()],
        )?;
        if changed == 0 {
            return Err(StoreError::UnknownEntry(entry));
        }
        Ok(())
    }

    fn set_topic_mastered(
        &mut self,
        roadmap: RoadmapId,
        topic: TopicId,
        mastered: bool,
    ) -> StoreResult<()> {
        if !self.exists(roadmap)? {
            return Err(StoreError::UnknownRoadmap(roadmap));
        }
        let changed = self.conn.execute(
            "UPDATE topics SET mastered = ?1 WHERE id = ?2 AND roadmap_id = ?3",
            rusqlite::params![mastered as i64, topic.0.to_string(), roadmap.0.to_string()],
        )?;
        if changed == 0 {
            return Err(StoreError::UnknownTopic(topic));
        }
        Ok(())
    }
}

// ── Parse helpers ─────────────────────────────────────────────────────────────

fn corrupt(what: &str, value: &str) -> StoreError {
    StoreError::Corrupt(format!("unrecognised {what}: {value:?}"))
}

fn parse_uuid(s: &str) -> StoreResult<uuid::Uuid> {
    uuid::Uuid::parse_str(s).map_err(|_| corrupt("UUID", s))
}

fn parse_date(s: &str) -> StoreResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| corrupt("date", s))
}

fn parse_timestamp(s: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| corrupt("timestamp", s))
}
