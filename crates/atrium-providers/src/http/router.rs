//! Route table
//!
//! Routes are appended by other providers after the router is bound, so the
//! table sits behind a lock and the router is shared as `Arc<Router>`. A
//! poisoned lock fails every operation with `Internal`, reads included.

use std::fmt;
use std::str::FromStr;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use atrium_domain::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// HTTP request method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    /// Upper-case wire name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "HEAD" => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            other => Err(Error::invalid_argument(format!(
                "unsupported HTTP method '{other}'"
            ))),
        }
    }
}

/// One entry of the route table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub method: Method,
    pub path: String,
    pub name: Option<String>,
}

/// Ordered route table
#[derive(Debug, Default)]
pub struct Router {
    routes: RwLock<Vec<Route>>,
}

impl Router {
    /// Empty route table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an unnamed route
    pub fn add(&self, method: Method, path: &str) -> Result<()> {
        self.insert(method, path, None)
    }

    /// Append a named route
    pub fn add_named(&self, method: Method, path: &str, name: &str) -> Result<()> {
        self.insert(method, path, Some(name.to_string()))
    }

    fn insert(&self, method: Method, path: &str, name: Option<String>) -> Result<()> {
        if !path.starts_with('/') {
            return Err(Error::invalid_argument(format!(
                "route path '{path}' must start with '/'"
            )));
        }

        let mut routes = self.write()?;

        if routes.iter().any(|r| r.method == method && r.path == path) {
            return Err(Error::invalid_argument(format!(
                "route {method} {path} is already registered"
            )));
        }
        if let Some(name) = &name
            && routes.iter().any(|r| r.name.as_ref() == Some(name))
        {
            return Err(Error::invalid_argument(format!(
                "route name '{name}' is already registered"
            )));
        }

        debug!(%method, path, "Route added");
        routes.push(Route {
            method,
            path: path.to_string(),
            name,
        });
        Ok(())
    }

    /// Route registered for `method` and `path`
    pub fn find(&self, method: Method, path: &str) -> Result<Option<Route>> {
        Ok(self
            .read()?
            .iter()
            .find(|r| r.method == method && r.path == path)
            .cloned())
    }

    /// Route registered under `name`
    pub fn find_by_name(&self, name: &str) -> Result<Option<Route>> {
        Ok(self
            .read()?
            .iter()
            .find(|r| r.name.as_deref() == Some(name))
            .cloned())
    }

    /// Snapshot of all routes in registration order
    pub fn routes(&self) -> Result<Vec<Route>> {
        Ok(self.read()?.clone())
    }

    /// Number of routes
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    /// Whether no route is registered
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Route>>> {
        self.routes
            .read()
            .map_err(|_| Error::internal("route table lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Route>>> {
        self.routes
            .write()
            .map_err(|_| Error::internal("route table lock poisoned"))
    }
}
