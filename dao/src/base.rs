use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Shape shared by every persisted record: `created_at` is set once at
/// construction, `updated_at` starts equal to it and is refreshed by every
/// `db_update`.
pub trait BaseDao {
    fn created_at(&self) -> &DateTime<Utc>;
    fn updated_at(&self) -> &DateTime<Utc>;
}

/// Records keyed by a random UUID assigned at construction and never
/// reassigned.
pub trait BaseUuidDao: BaseDao {
    fn id(&self) -> &Uuid;
}

/// In-memory counterpart of the `ORDER BY created_at DESC` every
/// select-many query uses.
pub fn sort_newest_first<T: BaseDao>(items: &mut [T]) {
    items.sort_by(|a, b| b.created_at().cmp(a.created_at()));
}

pub fn latest<T: BaseDao>(items: &[T]) -> Option<&T> {
    items.iter().max_by_key(|item| *item.created_at())
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    use super::{latest, sort_newest_first, BaseDao, BaseUuidDao};

    struct Row {
        id: Uuid,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    }

    impl Row {
        fn at(secs: i64) -> Self {
            let created_at = DateTime::from_timestamp(secs, 0).unwrap();
            Self {
                id: Uuid::new_v4(),
                created_at,
                updated_at: created_at,
            }
        }
    }

    impl BaseDao for Row {
        fn created_at(&self) -> &DateTime<Utc> {
            &self.created_at
        }

        fn updated_at(&self) -> &DateTime<Utc> {
            &self.updated_at
        }
    }

    impl BaseUuidDao for Row {
        fn id(&self) -> &Uuid {
            &self.id
        }
    }

    #[test]
    fn sorts_newest_first() {
        let mut rows = vec![Row::at(10), Row::at(30), Row::at(20)];

        sort_newest_first(&mut rows);

        let order = rows
            .iter()
            .map(|row| row.created_at().timestamp())
            .collect::<Vec<_>>();
        assert_eq!(order, [30, 20, 10]);
    }

    #[test]
    fn latest_picks_the_most_recently_created() {
        let rows = vec![Row::at(10), Row::at(30), Row::at(20)];

        let newest = latest(&rows).unwrap();
        assert_eq!(newest.created_at().timestamp(), 30);
        assert_eq!(newest.id(), rows[1].id());

        assert!(latest::<Row>(&[]).is_none());
    }

    #[test]
    fn updated_at_starts_equal_to_created_at() {
        let row = Row::at(10);
        assert_eq!(row.created_at(), row.updated_at());
    }
}
