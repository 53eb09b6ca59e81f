use crate::Result;

use skiff_core::{
    async_trait,
    driver::{Dialect, Driver, Session},
    Error,
};

use url::Url;

/// A driver chosen by the scheme of a connection URL.
#[derive(Debug)]
pub struct Connect {
    url: Url,
    driver: Box<dyn Driver>,
}

impl Connect {
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

        let driver = match url.scheme() {
            "sqlite" => connect_sqlite(&url)?,
            scheme => match Dialect::from_scheme(scheme) {
                Some(dialect) => {
                    return Err(Error::invalid_connection_url(format!(
                        "no built-in driver for `{dialect}`; build the `Db` with a driver instead; url={url}"
                    )))
                }
                None => {
                    return Err(Error::invalid_connection_url(format!(
                        "unsupported database; scheme={scheme}; url={url}"
                    )))
                }
            },
        };

        Ok(Self { url, driver })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Driver for Connect {
    fn dialect(&self) -> Dialect {
        self.driver.dialect()
    }

    async fn connect(&self) -> Result<Box<dyn Session>> {
        self.driver.connect().await
    }
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &Url) -> Result<Box<dyn Driver>> {
    Ok(Box::new(skiff_driver_sqlite::Sqlite::new(url.as_str())?))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(url: &Url) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url(format!(
        "`sqlite` feature not enabled; url={url}"
    )))
}
