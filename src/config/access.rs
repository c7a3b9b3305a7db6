use super::*;
use crate::ast::Value;

impl OmflConfig {
    /// Get a typed value from the configuration using dot notation.
    ///
    /// Automatically handles both `snake_case` and `kebab-case` key names,
    /// since OMFL keys allow both `_` and `-`.
    ///
    /// # Examples
    /// ```no_run
    /// # use omfl_cfg::OmflConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = OmflConfig::from_file("config.omfl")?;
    /// let ip: String = config.get("servers.first.ip")?;
    /// let port: u16 = config.get("servers.first.port")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns an error if the path doesn't exist or the value can't be
    /// converted to `T`.
    pub fn get<T>(&self, path: &str) -> Result<T, OmflError>
    where
        T: TryFrom<Value, Error = OmflError>,
    {
        let value = self.get_value_flexible(path)?;
        T::try_from(value)
            .map_err(|e| helpers::enhance_error_with_line_info(e, path, &self.raw_content))
    }

    /// Get an optional typed value - returns `None` if the key doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, OmflError>
    where
        T: TryFrom<Value, Error = OmflError>,
    {
        match self.get_value_flexible(path) {
            Ok(value) => Ok(Some(T::try_from(value)?)),
            Err(OmflError::KeyNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```no_run
    /// # use omfl_cfg::OmflConfig;
    /// # let config = OmflConfig::from_file("config.omfl").unwrap();
    /// let timeout = config.get_or("server.timeout", 30u32);
    /// let debug = config.get_or("server.debug", false);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = OmflError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get a raw [`Value`] from the configuration.
    ///
    /// An empty path returns the whole root section.
    pub fn get_value(&self, path: &str) -> Result<Value, OmflError> {
        if path.trim().is_empty() {
            return Ok(self.document.root().clone());
        }

        let value = self.document.get(path);
        if value.is_invalid() {
            return Err(OmflError::KeyNotFound {
                path: path.to_string(),
                hint: Some("Check that the path exists in your config file".into()),
            });
        }

        Ok(value.clone())
    }

    /// Get all keys at a given path level, in declaration order.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, OmflError> {
        let value = self.get_value(path)?;
        match value {
            Value::Section(entries) => Ok(entries.keys().cloned().collect()),
            _ => Err(OmflError::TypeError {
                message: format!("Path '{}' is not a section", path),
                line: 0,
                hint: Some("Only sections have keys".into()),
            }),
        }
    }

    /// Check if a configuration path exists.
    pub fn has(&self, path: &str) -> bool {
        self.get_value_flexible(path).is_ok()
    }

    /// Internal lookup that tries both snake_case and kebab-case variants
    /// of every path segment, exact spelling first.
    fn get_value_flexible(&self, path: &str) -> Result<Value, OmflError> {
        // Fast path: exact
        if let Ok(v) = self.get_value(path) {
            return Ok(v);
        }

        if path.trim().is_empty() {
            return self.get_value(path);
        }

        let segs: Vec<&str> = path.split('.').collect();

        fn variants(seg: &str) -> Vec<String> {
            let mut out = Vec::new();
            out.push(seg.to_string());

            let snake = seg.replace('-', "_");
            if snake != seg {
                out.push(snake);
            }

            let kebab = seg.replace('_', "-");
            if kebab != seg {
                out.push(kebab);
            }

            out.sort();
            out.dedup();
            out
        }

        // DFS over segment spellings, stop on the first that resolves
        fn dfs(
            cfg: &OmflConfig,
            segs: &[&str],
            i: usize,
            cur: &mut Vec<String>,
        ) -> Result<Value, OmflError> {
            if i == segs.len() {
                let candidate = cur.join(".");
                return cfg.get_value(&candidate);
            }

            for v in variants(segs[i]) {
                cur.push(v);
                if let Ok(val) = dfs(cfg, segs, i + 1, cur) {
                    return Ok(val);
                }
                cur.pop();
            }

            Err(OmflError::KeyNotFound {
                path: segs.join("."),
                hint: Some("Check that the path exists in your config file".into()),
            })
        }

        dfs(self, &segs, 0, &mut Vec::new())
    }
}
