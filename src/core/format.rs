//! Output syntax per CI/CD tool.
//!
//! Each tool gets one line per variable. The quoting is reproduced exactly
//! as pipelines already consume it, including the `'"'"'` sequences used by
//! circleci and teamcity to survive an outer single-quoted shell context.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Supported CI/CD tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Github,
    AzureDevops,
    Bamboo,
    Bitbucket,
    Circleci,
    Teamcity,
    Linux,
}

impl Tool {
    /// Every tool, in the order they are listed to users.
    pub const ALL: [Tool; 7] = [
        Tool::Github,
        Tool::AzureDevops,
        Tool::Bamboo,
        Tool::Bitbucket,
        Tool::Circleci,
        Tool::Teamcity,
        Tool::Linux,
    ];

    /// Identifier accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Tool::Github => "github",
            Tool::AzureDevops => "azure-devops",
            Tool::Bamboo => "bamboo",
            Tool::Bitbucket => "bitbucket",
            Tool::Circleci => "circleci",
            Tool::Teamcity => "teamcity",
            Tool::Linux => "linux",
        }
    }

    /// Render one variable, line terminator included.
    pub fn render(self, name: &str, value: &str) -> String {
        match self {
            Tool::Github => format!("echo '{name}={value}' >> $GITHUB_ENV\n"),
            Tool::AzureDevops => {
                format!("echo '##vso[task.setvariable variable={name};issecret=true;]{value}'\n")
            }
            Tool::Bamboo => format!("({name})=(.[{value}])\n"),
            Tool::Bitbucket => format!("export ({name})=\"(.[{value}])\"\n"),
            Tool::Circleci => {
                format!("echo '\"'\"'export ({name})=\"(.[{value}])\"'\"'\"' >> $BASH_ENV\n")
            }
            Tool::Teamcity => format!(
                "echo '\"'\"'##teamcity[setParameter name=\"({name})\" value=\"(.[{value}])\"]'\"'\"'\"\n"
            ),
            Tool::Linux => format!("declare -x {name}='{value}'\n"),
        }
    }

    /// Human-readable list of identifiers: `a, b, ... or z`.
    pub fn valid_list() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(|t| t.as_str()).collect();
        let (last, rest) = names.split_at(names.len() - 1);
        format!("{} or {}", rest.join(", "), last[0])
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = Error;

    /// Case-sensitive, no aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| Error::InvalidTool(s.to_string()))
    }
}
