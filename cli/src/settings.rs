use std::path::Path;

use anyhow::Context;
use minesweep_core::{Coord, FieldConfig};

/// Values given on the command line, applied on top of the config file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    pub columns: Option<Coord>,
    pub rows: Option<Coord>,
    pub mine_percent: Option<u8>,
    pub flood_fill: Option<bool>,
    pub seed: Option<u64>,
}

impl Overrides {
    fn apply(&self, mut config: FieldConfig) -> FieldConfig {
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(mine_percent) = self.mine_percent {
            config.mine_percent = mine_percent;
        }
        if let Some(flood_fill) = self.flood_fill {
            config.flood_fill = flood_fill;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

/// Defaults, then the optional TOML file, then command line overrides.
pub fn resolve(file: Option<&Path>, overrides: &Overrides) -> anyhow::Result<FieldConfig> {
    let base = match file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("could not read {}", path.display()))?;
            parse(&text).with_context(|| format!("could not parse {}", path.display()))?
        }
        None => FieldConfig::default(),
    };
    Ok(overrides.apply(base))
}

fn parse(text: &str) -> anyhow::Result<FieldConfig> {
    Ok(toml::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = parse("columns = 30\nflood_fill = false\n").unwrap();

        assert_eq!(config.columns, 30);
        assert_eq!(config.rows, FieldConfig::default().rows);
        assert_eq!(config.mine_percent, 35);
        assert!(!config.flood_fill);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn bad_file_is_an_error() {
        assert!(parse("columns = \"wide\"").is_err());
    }

    #[test]
    fn overrides_win_over_file() {
        let base = parse("columns = 30\nrows = 10\nseed = 9\n").unwrap();
        let overrides = Overrides {
            rows: Some(4),
            mine_percent: Some(50),
            flood_fill: Some(false),
            ..Default::default()
        };

        let config = overrides.apply(base);

        assert_eq!(config.size(), (30, 4));
        assert_eq!(config.mine_percent, 50);
        assert!(!config.flood_fill);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = resolve(Some(Path::new("/nonexistent/minesweep.toml")), &Overrides::default())
            .unwrap_err();

        assert!(err.to_string().contains("could not read"));
    }

    #[test]
    fn no_file_uses_defaults() {
        let config = resolve(None, &Overrides::default()).unwrap();

        assert_eq!(config, FieldConfig::default());
    }
}
