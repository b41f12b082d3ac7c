//! Database module - SQLite storage for saved workout plans

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::exercises::{ExperienceLevel, Goal, MuscleGroup};
use crate::generator::split::SplitStyle;
use crate::plan::{DayPlan, WorkoutPlan};

/// Saved plan header, as listed for a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    pub id: i64,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub goal: Goal,
    pub experience_level: ExperienceLevel,
    pub days_per_week: u32,
    pub body_split: SplitStyle,
}

/// A plan loaded back from storage
#[derive(Debug, Clone)]
pub struct SavedPlan {
    pub summary: PlanSummary,
    pub plan: WorkoutPlan,
}

/// Database wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path).with_context(|| format!("opening database {}", path))?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "PRAGMA foreign_keys = ON;
            CREATE TABLE IF NOT EXISTS workouts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                created_at TEXT NOT NULL,
                goal TEXT NOT NULL,
                experience_level TEXT NOT NULL,
                days_per_week INTEGER NOT NULL,
                body_split TEXT NOT NULL,
                priority_muscles TEXT NOT NULL,
                limitations TEXT
            );
            CREATE TABLE IF NOT EXISTS workout_days (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                workout_id INTEGER NOT NULL REFERENCES workouts(id) ON DELETE CASCADE,
                day INTEGER NOT NULL,
                payload TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_workouts_user ON workouts(user_id, created_at);",
        )?;
        Ok(())
    }

    /// Save plan header and days in one transaction
    pub fn save_plan(&self, user_id: &str, plan: &WorkoutPlan) -> Result<i64> {
        let tx = self.conn.unchecked_transaction()?;

        tx.execute(
            "INSERT INTO workouts (user_id, created_at, goal, experience_level, days_per_week, body_split, priority_muscles, limitations)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                user_id,
                Utc::now().to_rfc3339(),
                to_json(&plan.goal)?,
                to_json(&plan.experience_level)?,
                plan.days_per_week,
                to_json(&plan.body_split)?,
                serde_json::to_string(&plan.priority_muscles)?,
                plan.limitations,
            ],
        )?;
        let workout_id = tx.last_insert_rowid();

        for day in &plan.days {
            tx.execute(
                "INSERT INTO workout_days (workout_id, day, payload) VALUES (?1, ?2, ?3)",
                params![workout_id, day.day, serde_json::to_string(day)?],
            )?;
        }

        tx.commit()?;
        info!(workout_id, user_id, days = plan.days.len(), "workout plan saved");
        Ok(workout_id)
    }

    /// Plans saved by a user, newest first
    pub fn list_plans(&self, user_id: &str) -> Result<Vec<PlanSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, created_at, goal, experience_level, days_per_week, body_split
             FROM workouts WHERE user_id = ?1 ORDER BY id DESC",
        )?;

        let rows = stmt
            .query_map([user_id], |row| {
                Ok(HeaderRow {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    created_at: row.get(2)?,
                    goal: row.get(3)?,
                    experience_level: row.get(4)?,
                    days_per_week: row.get(5)?,
                    body_split: row.get(6)?,
                    priority_muscles: None,
                    limitations: None,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter().map(HeaderRow::into_summary).collect()
    }

    /// Load a saved plan by id
    pub fn load_plan(&self, id: i64) -> Result<Option<SavedPlan>> {
        let header = self
            .conn
            .query_row(
                "SELECT id, user_id, created_at, goal, experience_level, days_per_week, body_split, priority_muscles, limitations
                 FROM workouts WHERE id = ?1",
                [id],
                |row| {
                    Ok(HeaderRow {
                        id: row.get(0)?,
                        user_id: row.get(1)?,
                        created_at: row.get(2)?,
                        goal: row.get(3)?,
                        experience_level: row.get(4)?,
                        days_per_week: row.get(5)?,
                        body_split: row.get(6)?,
                        priority_muscles: Some(row.get(7)?),
                        limitations: row.get(8)?,
                    })
                },
            )
            .optional()?;

        let Some(header) = header else {
            return Ok(None);
        };

        let mut stmt = self
            .conn
            .prepare("SELECT payload FROM workout_days WHERE workout_id = ?1 ORDER BY day")?;
        let days = stmt
            .query_map([id], |row| row.get::<_, String>(0))?
            .map(|payload| -> Result<DayPlan> {
                let payload = payload?;
                serde_json::from_str(&payload).context("decoding workout day")
            })
            .collect::<Result<Vec<_>>>()?;

        let priority_muscles: Vec<MuscleGroup> = match &header.priority_muscles {
            Some(json) => serde_json::from_str(json).context("decoding priority muscles")?,
            None => Vec::new(),
        };
        let limitations = header.limitations.clone();
        let summary = header.into_summary()?;

        let plan = WorkoutPlan {
            goal: summary.goal,
            experience_level: summary.experience_level,
            days_per_week: summary.days_per_week,
            body_split: summary.body_split,
            priority_muscles,
            limitations,
            days,
        };

        Ok(Some(SavedPlan { summary, plan }))
    }

    /// Most recently saved plan of a user
    pub fn latest_plan(&self, user_id: &str) -> Result<Option<SavedPlan>> {
        match self.list_plans(user_id)?.first() {
            Some(summary) => self.load_plan(summary.id),
            None => Ok(None),
        }
    }
}

/// Raw `workouts` row before enum decoding
struct HeaderRow {
    id: i64,
    user_id: String,
    created_at: String,
    goal: String,
    experience_level: String,
    days_per_week: u32,
    body_split: String,
    priority_muscles: Option<String>,
    limitations: Option<String>,
}

impl HeaderRow {
    fn into_summary(self) -> Result<PlanSummary> {
        Ok(PlanSummary {
            id: self.id,
            user_id: self.user_id,
            created_at: DateTime::parse_from_rfc3339(&self.created_at)
                .map(|d| d.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
            goal: serde_json::from_str(&self.goal).context("decoding goal")?,
            experience_level: serde_json::from_str(&self.experience_level).context("decoding experience level")?,
            days_per_week: self.days_per_week,
            body_split: serde_json::from_str(&self.body_split).context("decoding split style")?,
        })
    }
}

/// Enums are stored as their JSON string form, e.g. `"fat_loss"`
fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::PlanGenerator;
    use crate::plan::FormData;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn create_plan(days: u32) -> WorkoutPlan {
        let form = FormData::new(Goal::Strength, ExperienceLevel::Advanced, days)
            .with_split(SplitStyle::UpperLower)
            .with_priority(&[MuscleGroup::Back])
            .with_limitations("shoulder impingement");
        PlanGenerator::default().generate(&form, &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_save_and_load() {
        let db = Database::open(":memory:").unwrap();
        let plan = create_plan(4);
        let id = db.save_plan("user-1", &plan).unwrap();

        let saved = db.load_plan(id).unwrap().unwrap();
        assert_eq!(saved.summary.id, id);
        assert_eq!(saved.summary.user_id, "user-1");
        assert_eq!(saved.plan, plan);
    }

    #[test]
    fn test_load_missing() {
        let db = Database::open(":memory:").unwrap();
        assert!(db.load_plan(42).unwrap().is_none());
    }

    #[test]
    fn test_list_plans_per_user() {
        let db = Database::open(":memory:").unwrap();
        db.save_plan("alice", &create_plan(2)).unwrap();
        db.save_plan("alice", &create_plan(3)).unwrap();
        db.save_plan("bob", &create_plan(4)).unwrap();

        let alice = db.list_plans("alice").unwrap();
        assert_eq!(alice.len(), 2);
        assert!(alice.iter().all(|p| p.user_id == "alice"));
        assert_eq!(db.list_plans("bob").unwrap().len(), 1);
        assert!(db.list_plans("carol").unwrap().is_empty());
    }

    #[test]
    fn test_latest_plan() {
        let db = Database::open(":memory:").unwrap();
        db.save_plan("alice", &create_plan(2)).unwrap();
        let newest = db.save_plan("alice", &create_plan(5)).unwrap();

        let latest = db.latest_plan("alice").unwrap().unwrap();
        assert_eq!(latest.summary.id, newest);
        assert_eq!(latest.plan.days.len(), 5);
        assert!(db.latest_plan("nobody").unwrap().is_none());
    }

    #[test]
    fn test_days_stored_in_order() {
        let db = Database::open(":memory:").unwrap();
        let id = db.save_plan("u", &create_plan(6)).unwrap();
        let saved = db.load_plan(id).unwrap().unwrap();
        let days: Vec<u32> = saved.plan.days.iter().map(|d| d.day).collect();
        assert_eq!(days, vec![1, 2, 3, 4, 5, 6]);
    }
}
