#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use go_app_gen::error::{Error, Result};
use go_app_gen::post_process::CommandRunner;
use go_app_gen::project::ProjectConfig;

/// Records every command and fails the ones listed in `failing`.
#[derive(Default)]
pub struct FakeRunner {
    failing: Vec<String>,
    pub calls: RefCell<Vec<(PathBuf, String)>>,
}

impl FakeRunner {
    pub fn failing(commands: &[&str]) -> Self {
        Self { failing: commands.iter().map(|c| c.to_string()).collect(), ..Default::default() }
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(_, command)| command.clone()).collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, dir: &Path, program: &str, args: &[String]) -> Result<()> {
        let command = std::iter::once(program.to_string())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls.borrow_mut().push((dir.to_path_buf(), command.clone()));

        if self.failing.contains(&command) {
            return Err(Error::CommandFailed { command, status: "exit status: 1".to_string() });
        }
        Ok(())
    }
}

pub fn config(app_name: &str, domain: &str, features: &[&str]) -> ProjectConfig {
    ProjectConfig {
        app_name: app_name.to_string(),
        module_name: format!("example.com/{app_name}"),
        domain: domain.to_string(),
        description: format!("A {domain} management API"),
        author: "Developer".to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}
