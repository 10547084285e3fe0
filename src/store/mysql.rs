use crate::config::DatabaseConfig;
use crate::constants::{COUNTRY_TABLE, MAX_POOL_CONNECTIONS, RECONNECT_ATTEMPTS};
use crate::models::Country;
use crate::store::{DatabaseConnection, RecordStore};
use crate::Error;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use mysql_async::prelude::Queryable;
use mysql_async::{params, Conn, Pool, PoolConstraints, PoolOpts, SslOpts};
use tracing::{error, info, warn};

// MySQL ER_DUP_ENTRY
const DUPLICATE_ENTRY: u16 = 1062;

type CountryRow = (String, String, Option<f64>, Option<f64>);

fn country_from_row((code, name, internet_users, adult_literacy_rate): CountryRow) -> Country {
    Country {
        code,
        name,
        internet_users,
        adult_literacy_rate,
    }
}

pub struct MySqlStore {
    pool: Pool,
    config: DatabaseConfig,
    reconnect_attempts: u32,
    reconnect_delay: std::time::Duration,
}

impl MySqlStore {
    pub fn new(config: DatabaseConfig) -> Result<Self> {
        let pool = Self::create_pool(&config)?;
        Ok(Self {
            pool,
            reconnect_delay: config.retry_interval(),
            config,
            reconnect_attempts: RECONNECT_ATTEMPTS,
        })
    }

    fn create_pool(config: &DatabaseConfig) -> Result<Pool> {
        info!("Creating connection pool with configuration:");
        info!(
            "Host: {}, Port: {}, Database: {}, SSL: {}",
            config.host, config.port, config.database, config.use_ssl
        );

        let pool_constraints = PoolConstraints::new(0, MAX_POOL_CONNECTIONS)
            .context("Failed to create pool constraints")?;
        let pool_opts = PoolOpts::default().with_constraints(pool_constraints);

        let mut opts = mysql_async::OptsBuilder::default()
            .ip_or_hostname(config.host.clone())
            .tcp_port(config.port)
            .user(Some(config.user.clone()))
            .pass(Some(config.password.clone()))
            .db_name(Some(config.database.clone()))
            .pool_opts(pool_opts);

        if config.use_ssl {
            opts = opts.ssl_opts(SslOpts::default());
        }

        Ok(Pool::new(opts))
    }

    async fn get_conn(&self) -> Result<Conn> {
        let conn = tokio::time::timeout(self.config.connection_timeout(), self.pool.get_conn())
            .await
            .map_err(|_| {
                Error::Database(format!(
                    "Timed out after {}s waiting for a connection",
                    self.config.connection_timeout
                ))
            })?
            .map_err(Error::from)
            .context("Failed to get connection from pool")?;
        Ok(conn)
    }

    async fn ensure_schema(&self) -> Result<()> {
        let mut conn = self.get_conn().await?;
        let query = format!(
            r"
            CREATE TABLE IF NOT EXISTS {} (
                code VARCHAR(3) NOT NULL PRIMARY KEY,
                name VARCHAR(32) NOT NULL,
                internetUsers DOUBLE NULL,
                adultLiteracyRate DOUBLE NULL
            )",
            COUNTRY_TABLE
        );
        conn.query_drop(query)
            .await
            .map_err(Error::from)
            .context("Failed to create country table")?;
        Ok(())
    }

    fn map_write_error(err: mysql_async::Error, code: &str) -> anyhow::Error {
        match err {
            mysql_async::Error::Server(ref server) if server.code == DUPLICATE_ENTRY => {
                Error::Validation(format!("Country code {} already exists", code)).into()
            }
            other => Error::from(other).into(),
        }
    }
}

#[async_trait]
impl RecordStore for MySqlStore {
    async fn list_all(&self) -> Result<Vec<Country>> {
        let mut conn = self.get_conn().await?;
        let query = format!(
            "SELECT code, name, internetUsers, adultLiteracyRate FROM {} ORDER BY code ASC",
            COUNTRY_TABLE
        );

        let start_time = std::time::Instant::now();
        let countries = conn
            .query_map(query, country_from_row)
            .await
            .map_err(Error::from)
            .context("Failed to list countries")?;

        info!(
            "Fetched {} countries in {:?}",
            countries.len(),
            start_time.elapsed()
        );
        Ok(countries)
    }

    async fn get(&self, code: &str) -> Result<Option<Country>> {
        let mut conn = self.get_conn().await?;
        let query = format!(
            "SELECT code, name, internetUsers, adultLiteracyRate FROM {} WHERE code = :code",
            COUNTRY_TABLE
        );

        let row: Option<CountryRow> = conn
            .exec_first(query.as_str(), params! { "code" => code })
            .await
            .map_err(Error::from)
            .with_context(|| format!("Failed to fetch country {}", code))?;

        Ok(row.map(country_from_row))
    }

    async fn insert(&self, country: &Country) -> Result<()> {
        let mut conn = self.get_conn().await?;
        let query = format!(
            r"INSERT INTO {} (code, name, internetUsers, adultLiteracyRate)
            VALUES (:code, :name, :internet_users, :adult_literacy_rate)",
            COUNTRY_TABLE
        );

        conn.exec_drop(
            query.as_str(),
            params! {
                "code" => country.code.as_str(),
                "name" => country.name.as_str(),
                "internet_users" => country.internet_users,
                "adult_literacy_rate" => country.adult_literacy_rate,
            },
        )
        .await
        .map_err(|e| Self::map_write_error(e, &country.code))?;

        info!("Inserted country {}", country.code);
        Ok(())
    }

    async fn update(&self, code: &str, country: &Country) -> Result<()> {
        let mut conn = self.get_conn().await?;
        let query = format!(
            r"UPDATE {} SET code = :new_code, name = :name,
            internetUsers = :internet_users, adultLiteracyRate = :adult_literacy_rate
            WHERE code = :code",
            COUNTRY_TABLE
        );

        conn.exec_drop(
            query.as_str(),
            params! {
                "new_code" => country.code.as_str(),
                "name" => country.name.as_str(),
                "internet_users" => country.internet_users,
                "adult_literacy_rate" => country.adult_literacy_rate,
                "code" => code,
            },
        )
        .await
        .map_err(|e| Self::map_write_error(e, &country.code))?;

        // affected_rows is 0 for a missing code, and also for an unchanged row
        if conn.affected_rows() == 0 && self.get(&country.code).await?.is_none() {
            return Err(Error::NotFound(format!("Country code {}", code)).into());
        }

        info!("Updated country {} -> {}", code, country.code);
        Ok(())
    }

    async fn delete(&self, code: &str) -> Result<()> {
        let mut conn = self.get_conn().await?;
        let query = format!("DELETE FROM {} WHERE code = :code", COUNTRY_TABLE);

        conn.exec_drop(query.as_str(), params! { "code" => code })
            .await
            .map_err(Error::from)
            .with_context(|| format!("Failed to delete country {}", code))?;

        if conn.affected_rows() == 0 {
            return Err(Error::NotFound(format!("Country code {}", code)).into());
        }

        info!("Deleted country {}", code);
        Ok(())
    }
}

#[async_trait]
impl DatabaseConnection for MySqlStore {
    async fn connect(&self) -> Result<()> {
        for attempt in 1..=self.reconnect_attempts {
            match self.ensure_schema().await {
                Ok(()) => {
                    info!("Successfully established connection to database");
                    return Ok(());
                }
                Err(e) if attempt < self.reconnect_attempts => {
                    warn!(
                        "Connection attempt {} failed: {}. Retrying in {} seconds...",
                        attempt,
                        e,
                        self.reconnect_delay.as_secs()
                    );
                    tokio::time::sleep(self.reconnect_delay).await;
                }
                Err(e) => {
                    error!("Failed to connect after {} attempts: {}", attempt, e);
                    return Err(e.context("Failed to connect after maximum attempts"));
                }
            }
        }

        Err(anyhow!("Failed to connect after maximum attempts"))
    }

    async fn disconnect(&self) -> Result<()> {
        self.pool
            .clone()
            .disconnect()
            .await
            .map_err(Error::from)
            .context("Failed to disconnect pool")?;
        Ok(())
    }
}
