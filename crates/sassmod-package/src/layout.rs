//! On-disk conventions of the supported package managers.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// `node_modules/<name>/package.json`
    Npm,
    /// `bower_components/<name>/bower.json`, relocatable through `.bowerrc`
    Bower,
}

impl Layout {
    pub fn modules_dir(self) -> &'static str {
        match self {
            Layout::Npm => "node_modules",
            Layout::Bower => "bower_components",
        }
    }

    /// Manifest file names, most authoritative first.
    pub fn manifests(self) -> &'static [&'static str] {
        match self {
            Layout::Npm => &["package.json"],
            Layout::Bower => &["bower.json", ".bower.json"],
        }
    }

    /// Per-project config file that may move the modules directory.
    pub fn rc_file(self) -> Option<&'static str> {
        match self {
            Layout::Npm => None,
            Layout::Bower => Some(".bowerrc"),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Npm => write!(f, "npm"),
            Layout::Bower => write!(f, "bower"),
        }
    }
}
