use async_trait::async_trait;
use dnscheck_application::ports::HistoryRepository;
use dnscheck_domain::{history_key, DomainError, DomainResultSet, HistoryRecord, TimeNode};
use sqlx::SqlitePool;
use std::collections::HashMap;
use tracing::{debug, error, instrument, warn};

type RecordRow = (i64, String, String, String, String, String);
type NodeRow = (i64, String, String, String, String, String);

const MAX_NODE_ID_SUFFIX: u32 = 999;

pub struct SqliteHistoryRepository {
    pool: SqlitePool,
}

impl SqliteHistoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn decode_list(column: &str, raw: &str) -> Vec<String> {
        serde_json::from_str(raw).unwrap_or_else(|e| {
            warn!(column, error = %e, "Unreadable history column, using empty list");
            Vec::new()
        })
    }

    fn row_to_node(row: NodeRow) -> (i64, TimeNode) {
        let (record_id, node_id, results, date, time, timestamp) = row;
        let results: DomainResultSet = serde_json::from_str(&results).unwrap_or_else(|e| {
            warn!(node_id = %node_id, error = %e, "Unreadable history results, using empty set");
            DomainResultSet::new()
        });

        (
            record_id,
            TimeNode {
                id: node_id,
                date,
                time,
                timestamp,
                results,
            },
        )
    }
}

fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        error!(error = %e, "{}", context);
        DomainError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl HistoryRepository for SqliteHistoryRepository {
    #[instrument(skip(self, dns_servers, node))]
    async fn record(
        &self,
        domains: &[String],
        dns_servers: &[String],
        node: TimeNode,
        max_records: usize,
    ) -> Result<(), DomainError> {
        let key = history_key(domains);
        let domains_json = serde_json::to_string(domains)
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        let servers_json = serde_json::to_string(dns_servers)
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        let results_json = serde_json::to_string(&node.results)
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to start history transaction"))?;

        let (record_id,): (i64,) = sqlx::query_as(
            "INSERT INTO history_records (domains_key, domains, dns_servers, date, time, timestamp)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT(domains_key) DO UPDATE SET
                dns_servers = excluded.dns_servers,
                date = excluded.date,
                time = excluded.time,
                timestamp = excluded.timestamp
             RETURNING id",
        )
        .bind(&key)
        .bind(&domains_json)
        .bind(&servers_json)
        .bind(&node.date)
        .bind(&node.time)
        .bind(&node.timestamp)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("Failed to upsert history record"))?;

        // Ids only resolve to the millisecond; a clash gets a `-N` suffix,
        // which still sorts after the plain id.
        let mut node_id = node.id.clone();
        let mut attempt = 0;
        loop {
            let inserted = sqlx::query(
                "INSERT INTO history_nodes (node_id, record_id, results, date, time, timestamp)
                 VALUES (?, ?, ?, ?, ?, ?)
                 ON CONFLICT(node_id) DO NOTHING",
            )
            .bind(&node_id)
            .bind(record_id)
            .bind(&results_json)
            .bind(&node.date)
            .bind(&node.time)
            .bind(&node.timestamp)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to insert history node"))?
            .rows_affected();

            if inserted > 0 {
                break;
            }
            attempt += 1;
            if attempt > MAX_NODE_ID_SUFFIX {
                return Err(DomainError::DatabaseError(format!(
                    "no free history node id for {}",
                    node.id
                )));
            }
            node_id = format!("{}-{}", node.id, attempt);
        }

        let pruned = sqlx::query(
            "DELETE FROM history_records WHERE id NOT IN (
                SELECT record_id FROM history_nodes
                GROUP BY record_id
                ORDER BY MAX(seq) DESC
                LIMIT ?
             )",
        )
        .bind(max_records as i64)
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to prune history"))?
        .rows_affected();

        sqlx::query("DELETE FROM history_nodes WHERE record_id NOT IN (SELECT id FROM history_records)")
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to remove orphaned history nodes"))?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit history transaction"))?;

        debug!(key = %key, record_id, node_id = %node_id, pruned, "History node stored");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<HistoryRecord>, DomainError> {
        let records = sqlx::query_as::<_, RecordRow>(
            "SELECT r.id, r.domains, r.dns_servers, r.date, r.time, r.timestamp
             FROM history_records r
             JOIN history_nodes n ON n.record_id = r.id
             GROUP BY r.id
             ORDER BY MAX(n.seq) DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to query history records"))?;

        let node_rows = sqlx::query_as::<_, NodeRow>(
            "SELECT record_id, node_id, results, date, time, timestamp
             FROM history_nodes ORDER BY seq DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to query history nodes"))?;

        let mut nodes_by_record: HashMap<i64, Vec<TimeNode>> = HashMap::new();
        for row in node_rows {
            let (record_id, node) = Self::row_to_node(row);
            nodes_by_record.entry(record_id).or_default().push(node);
        }

        Ok(records
            .into_iter()
            .map(|(id, domains, dns_servers, date, time, timestamp)| HistoryRecord {
                domains: Self::decode_list("domains", &domains),
                dns_servers: Self::decode_list("dns_servers", &dns_servers),
                date,
                time,
                timestamp,
                nodes: nodes_by_record.remove(&id).unwrap_or_default(),
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to start history transaction"))?;

        let deleted = sqlx::query(
            "DELETE FROM history_records
             WHERE id IN (SELECT record_id FROM history_nodes WHERE node_id = ?)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to delete history record"))?
        .rows_affected();

        sqlx::query("DELETE FROM history_nodes WHERE record_id NOT IN (SELECT id FROM history_records)")
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to remove orphaned history nodes"))?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit history transaction"))?;

        Ok(deleted > 0)
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<u64, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to start history transaction"))?;

        sqlx::query("DELETE FROM history_nodes")
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to clear history nodes"))?;

        let removed = sqlx::query("DELETE FROM history_records")
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to clear history records"))?
            .rows_affected();

        tx.commit()
            .await
            .map_err(db_error("Failed to commit history transaction"))?;

        Ok(removed)
    }
}
