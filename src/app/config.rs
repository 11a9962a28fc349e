use crate::app::cli::Cli;
use crate::app::error::AggregateError;
use crate::app::models::{Config, Options, SortBy, SortOrder, WriteType};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_INPUT_DIR: &str = ".";
const DEFAULT_OUTPUT_FILE: &str = "output.md";
const DEFAULT_SEPARATOR: &str = "\n\n----\n\n";
const DEFAULT_TITLE_LEVEL: u8 = 1;

/// Fills every unset option with its default and makes both paths absolute.
///
/// Resolution never rejects anything: a missing input directory still
/// resolves here and is caught by [`validate`] instead.
pub fn resolve(options: Options) -> Result<Config, AggregateError> {
    let current_dir = env::current_dir().map_err(AggregateError::CurrentDir)?;

    let input_dir = options.input_dir.unwrap_or_else(|| {
        log::debug!("No input directory given, using {}", DEFAULT_INPUT_DIR);
        PathBuf::from(DEFAULT_INPUT_DIR)
    });
    let output_file = options.output_file.unwrap_or_else(|| {
        log::debug!("No output file given, using {}", DEFAULT_OUTPUT_FILE);
        PathBuf::from(DEFAULT_OUTPUT_FILE)
    });

    let title_level = options
        .title_level
        .unwrap_or(DEFAULT_TITLE_LEVEL)
        .clamp(1, 6);
    let title_template = options
        .title_template
        .unwrap_or_else(|| format!("{} {{fileName}}", "#".repeat(title_level as usize)));

    Ok(Config {
        input_dir: absolutize(&current_dir, input_dir),
        output_file: absolutize(&current_dir, output_file),
        write_type: options.write_type.unwrap_or_default(),
        separator: options
            .separator
            .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
        title_template,
        insert_file_name: options.insert_file_name.unwrap_or(false),
        include: options.include,
        exclude: options.exclude,
        sort_by: options.sort_by,
        sort_order: options.sort_order.unwrap_or_default(),
    })
}

/// The single validation gate: the resolved input directory must exist and
/// be a directory. No other field is checked structurally.
pub fn validate(config: &Config) -> Result<(), AggregateError> {
    let dir = &config.input_dir;

    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => {
            log::error!("{} is not a directory", dir.display());
            Err(AggregateError::InputDirNotADirectory(dir.clone()))
        }
        Err(_) => {
            log::error!("{} does not exist", dir.display());
            Err(AggregateError::InputDirMissing(dir.clone()))
        }
    }
}

fn absolutize(base: &Path, path: PathBuf) -> PathBuf {
    let joined = if path.is_absolute() {
        path
    } else {
        base.join(path)
    };
    // Components normalizes away "." segments and doubled separators.
    joined.components().collect()
}

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, Preset>,
}

/// One named entry in presets.toml. Paths are deliberately absent: they are
/// per-invocation, not per-preset.
#[derive(Deserialize, Debug, Clone, Default)]
struct Preset {
    include: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
    write_type: Option<WriteType>,
    separator: Option<String>,
    title_level: Option<u8>,
    title_template: Option<String>,
    insert_file_name: Option<bool>,
    sort_by: Option<SortBy>,
    sort_order: Option<SortOrder>,
}

fn load_presets_file() -> Result<HashMap<String, Preset>> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let config_path = home.join(".config").join("mdmerge").join("presets.toml");

    if !config_path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config at {:?}", config_path))?;
    let parsed: PresetsFile = toml::from_str(&content).context("Failed to parse presets.toml")?;

    Ok(parsed.presets)
}

/// Builds the library options from parsed arguments, merging in a named
/// preset when one was requested. CLI values win for scalar options; pattern
/// lists are concatenated preset-then-CLI.
pub fn build_options(cli: Cli) -> Result<Options> {
    let preset = match cli.preset.as_deref() {
        Some(name) => {
            let presets = load_presets_file()?;
            presets
                .get(name)
                .cloned()
                .with_context(|| format!("Preset \"{}\" not found in presets.toml", name))?
        }
        None => Preset::default(),
    };

    Ok(merge_cli_with_preset(cli, preset))
}

fn merge_cli_with_preset(cli: Cli, preset: Preset) -> Options {
    Options {
        input_dir: cli.input_dir,
        output_file: cli.output_file,
        write_type: cli.write_type.or(preset.write_type),
        separator: cli.separator.or(preset.separator),
        title_level: cli.title_level.or(preset.title_level),
        title_template: cli.title_template.or(preset.title_template),
        insert_file_name: cli
            .insert_file_name
            .then_some(true)
            .or(preset.insert_file_name),
        include: merge_vecs(preset.include, cli.include),
        exclude: merge_vecs(preset.exclude, cli.exclude),
        sort_by: cli.sort_by.or(preset.sort_by),
        sort_order: cli.sort_order.or(preset.sort_order),
    }
}

fn merge_vecs(preset_vec: Option<Vec<String>>, cli_vec: Option<Vec<String>>) -> Vec<String> {
    let mut combined = preset_vec.unwrap_or_default();
    if let Some(mut cli_items) = cli_vec {
        combined.append(&mut cli_items);
    }
    // Deduplicate while keeping order
    let mut seen = std::collections::HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn resolve_applies_defaults() {
        let config = resolve(Options::default()).unwrap();

        assert!(config.input_dir.is_absolute());
        assert!(config.output_file.is_absolute());
        assert!(config.output_file.ends_with("output.md"));
        assert_eq!(config.separator, "\n\n----\n\n");
        assert_eq!(config.title_template, "# {fileName}");
        assert_eq!(config.write_type, WriteType::Overwrite);
        assert_eq!(config.sort_order, SortOrder::Asc);
        assert!(!config.insert_file_name);
        assert!(config.sort_by.is_none());
    }

    #[test]
    fn resolve_derives_template_from_title_level() {
        let options = Options {
            title_level: Some(3),
            ..Options::default()
        };
        assert_eq!(resolve(options).unwrap().title_template, "### {fileName}");
    }

    #[test]
    fn resolve_clamps_title_level_to_heading_depths() {
        let too_deep = Options {
            title_level: Some(9),
            ..Options::default()
        };
        assert_eq!(
            resolve(too_deep).unwrap().title_template,
            "###### {fileName}"
        );

        let zero = Options {
            title_level: Some(0),
            ..Options::default()
        };
        assert_eq!(resolve(zero).unwrap().title_template, "# {fileName}");
    }

    #[test]
    fn resolve_keeps_explicit_template_over_level() {
        let options = Options {
            title_level: Some(3),
            title_template: Some("> {fileName}".into()),
            ..Options::default()
        };
        assert_eq!(resolve(options).unwrap().title_template, "> {fileName}");
    }

    #[test]
    fn resolve_makes_relative_paths_absolute() {
        let options = Options {
            input_dir: Some(PathBuf::from("docs")),
            output_file: Some(PathBuf::from("out/merged.md")),
            ..Options::default()
        };
        let config = resolve(options).unwrap();
        let cwd = env::current_dir().unwrap();

        assert_eq!(config.input_dir, cwd.join("docs"));
        assert_eq!(config.output_file, cwd.join("out/merged.md"));
    }

    #[test]
    fn validate_accepts_a_directory() {
        let tmp = TempDir::new().unwrap();
        let options = Options {
            input_dir: Some(tmp.path().to_path_buf()),
            ..Options::default()
        };
        let config = resolve(options).unwrap();

        assert!(validate(&config).is_ok());
    }

    #[test]
    fn validate_rejects_a_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let options = Options {
            input_dir: Some(tmp.path().join("gone")),
            ..Options::default()
        };
        let config = resolve(options).unwrap();

        assert!(matches!(
            validate(&config),
            Err(AggregateError::InputDirMissing(_))
        ));
    }

    #[test]
    fn validate_rejects_a_file_as_input_dir() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.md");
        fs::write(&file, "x").unwrap();
        let options = Options {
            input_dir: Some(file),
            ..Options::default()
        };
        let config = resolve(options).unwrap();

        assert!(matches!(
            validate(&config),
            Err(AggregateError::InputDirNotADirectory(_))
        ));
    }

    #[test]
    fn merge_vecs_concatenates_and_deduplicates() {
        let merged = merge_vecs(
            Some(vec!["a".into(), "b".into()]),
            Some(vec!["b".into(), "c".into()]),
        );
        assert_eq!(merged, ["a", "b", "c"]);
    }

    #[test]
    fn preset_parses_from_toml() {
        let preset: Preset = toml::from_str(
            r#"
            include = ["docs/.*"]
            separator = "\n***\n"
            title_level = 2
            insert_file_name = true
            sort_by = "size"
            sort_order = "desc"
            write_type = "append"
            "#,
        )
        .unwrap();

        assert_eq!(preset.include.as_deref(), Some(&["docs/.*".to_string()][..]));
        assert_eq!(preset.title_level, Some(2));
        assert_eq!(preset.sort_by, Some(SortBy::Size));
        assert_eq!(preset.sort_order, Some(SortOrder::Desc));
        assert_eq!(preset.write_type, Some(WriteType::Append));
    }

    #[test]
    fn cli_values_win_over_preset_scalars() {
        let cli = Cli::parse_from(["mdmerge", "--separator", "|", "--include", "cli.*"]);
        let preset = Preset {
            include: Some(vec!["preset.*".into()]),
            separator: Some("***".into()),
            title_level: Some(4),
            ..Preset::default()
        };

        let options = merge_cli_with_preset(cli, preset);
        assert_eq!(options.separator.as_deref(), Some("|"));
        assert_eq!(options.title_level, Some(4));
        assert_eq!(options.include, ["preset.*", "cli.*"]);
    }

    #[test]
    fn preset_can_enable_title_insertion() {
        let cli = Cli::parse_from(["mdmerge"]);
        let preset = Preset {
            insert_file_name: Some(true),
            ..Preset::default()
        };

        let options = merge_cli_with_preset(cli, preset);
        assert_eq!(options.insert_file_name, Some(true));
    }
}
