//! User configuration: the reference tuning and additional named modes, read from YAML.

use serde_derive::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use crate::{error::TheoryErr, mode::Mode, reference::Reference, span::Span};

/// A named mode as written in a configuration file. Entries are parsed as [Span]s, so a
/// just-intonation ratio like `5/4` is accepted by the parser but rejected when the mode is
/// built.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModeDefinition {
    pub name: String,
    #[serde_as(as = "Vec<DisplayFromStr>")]
    pub intervals: Vec<Span>,
}

impl ModeDefinition {
    pub fn to_mode(&self) -> Result<Mode, TheoryErr> {
        let intervals = self
            .intervals
            .iter()
            .map(|s| s.to_interval("mode definition"))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Mode::new(intervals))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TheoryConfig {
    pub reference: Reference,
    pub modes: Vec<ModeDefinition>,
}

impl TheoryConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, TheoryErr> {
        let config: TheoryConfig = serde_yml::from_str(s)?;
        config.reference.validate()?;
        log::debug!(
            "read configuration with reference {} = {} Hz and {} modes",
            config.reference.note,
            config.reference.frequency,
            config.modes.len()
        );
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, TheoryErr> {
        Ok(serde_yml::to_string(self)?)
    }

    /// All configured modes, in the order they were defined.
    pub fn modes(&self) -> Result<Vec<(&str, Mode)>, TheoryErr> {
        self.modes
            .iter()
            .map(|d| d.to_mode().map(|m| (d.name.as_str(), m)))
            .collect()
    }

    /// The first mode called `name`, if any.
    pub fn mode(&self, name: &str) -> Option<Result<Mode, TheoryErr>> {
        self.modes
            .iter()
            .find(|d| d.name == name)
            .map(ModeDefinition::to_mode)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{note::Note, reference::A440};
    use pretty_assertions::assert_eq;

    const EXAMPLE: &str = "
reference:
  note: C4
  frequency: 256.0
modes:
  - name: harmonic minor
    intervals: [P1, M2, m3, P4, P5, m6, M7]
  - name: just major triad
    intervals: [P1, 5/4, 3/2]
";

    #[test]
    fn test_read_config() {
        let config = TheoryConfig::from_yaml_str(EXAMPLE).unwrap();
        assert_eq!(config.reference.note, Note::parse("C4").unwrap());
        assert_eq!(config.reference.frequency, 256.0);
        assert_eq!(config.modes.len(), 2);

        let harmonic_minor = config.mode("harmonic minor").unwrap().unwrap();
        assert_eq!(
            harmonic_minor,
            Mode::from_names(&["P1", "M2", "m3", "P4", "P5", "m6", "M7"]).unwrap()
        );

        assert!(matches!(
            config.mode("just major triad"),
            Some(Err(TheoryErr::TypeMismatch { found: "ratio", .. }))
        ));
        assert!(config.mode("lydian dominant").is_none());
        assert!(config.modes().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = TheoryConfig::from_yaml_str("modes: []").unwrap();
        assert_eq!(config.reference, A440);
        assert_eq!(config, TheoryConfig::default());
        assert!(config.modes().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            TheoryConfig::from_yaml_str("tuning: 12tet"),
            Err(TheoryErr::Config(_))
        ));
        assert!(matches!(
            TheoryConfig::from_yaml_str("modes: [{name: x, intervals: [P2]}]"),
            Err(TheoryErr::Config(_))
        ));
        for yaml in [
            "modes: [{name: x, intervals: [\"-9223372036854775808/-1\"]}]",
            "modes: [{name: x, intervals: [\"1/0\"]}]",
            "modes: [{name: x, intervals: [M99999999999]}]",
            "reference: {note: C1001, frequency: 440.0}",
            "reference: {note: 10000000000, frequency: 440.0}",
        ] {
            assert!(
                matches!(TheoryConfig::from_yaml_str(yaml), Err(TheoryErr::Config(_))),
                "{yaml}"
            );
        }
        assert!(matches!(
            TheoryConfig::from_yaml_str("reference: {note: A4, frequency: -1.0}"),
            Err(TheoryErr::InvalidValue("frequency", _))
        ));
    }

    #[test]
    fn test_round_trip() {
        let config = TheoryConfig::from_yaml_str(EXAMPLE).unwrap();
        let yaml = config.to_yaml_string().unwrap();
        assert_eq!(TheoryConfig::from_yaml_str(&yaml).unwrap(), config);
    }
}
