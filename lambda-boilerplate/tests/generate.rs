//! Integration tests for project generation

use lambda_boilerplate::{
    Answers, GenerateCommand, GenerateError, GeneratorOptions, Prompter, Questions,
    TEMPLATES_PATH_ENV,
};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Prompter answering from a script, recording the questions it was asked
struct ScriptedPrompter {
    template: String,
    project_name: Option<String>,
    asked: Vec<Questions>,
}

impl ScriptedPrompter {
    fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
            project_name: None,
            asked: Vec::new(),
        }
    }

    fn named(mut self, name: &str) -> Self {
        self.project_name = Some(name.to_string());
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, questions: &Questions) -> Result<Answers, GenerateError> {
        self.asked.push(questions.clone());
        Ok(Answers {
            destination: questions.default_destination.clone(),
            template: self.template.clone(),
            project_name: self
                .project_name
                .clone()
                .or_else(|| questions.default_name.clone())
                .unwrap_or_default(),
        })
    }
}

/// Template root with `lambda/a.txt` and `lambda/sub/b.txt`
fn template_root(temp: &TempDir) -> PathBuf {
    let root = temp.path().join("templates");
    fs::create_dir_all(root.join("lambda/sub")).unwrap();
    fs::create_dir_all(root.join("other")).unwrap();
    fs::write(root.join("lambda/a.txt"), "Hi {{projectName}}").unwrap();
    fs::write(root.join("lambda/sub/b.txt"), "name: {{projectName}}\n").unwrap();
    root
}

/// Prompter whose terminal is gone
struct FailingPrompter;

impl Prompter for FailingPrompter {
    fn ask(&mut self, _questions: &Questions) -> Result<Answers, GenerateError> {
        Err(dialoguer::Error::IO(io::Error::other("boom")).into())
    }
}

fn options(dest: &Path, root: &Path, name: Option<&str>) -> GeneratorOptions {
    GeneratorOptions {
        destination: Some(dest.to_path_buf()),
        templates_root: Some(root.to_path_buf()),
        project_name: name.map(str::to_string),
    }
}

#[test]
fn test_generates_rendered_tree() {
    let temp = TempDir::new().unwrap();
    let root = template_root(&temp);
    let dest = temp.path().join("dest");
    fs::create_dir(&dest).unwrap();

    let mut prompter = ScriptedPrompter::new("lambda").named("demo");
    let project = GenerateCommand::new(options(&dest, &root, None))
        .execute(&mut prompter)
        .unwrap();

    assert_eq!(project, dest.join("demo"));
    assert_eq!(fs::read_to_string(project.join("a.txt")).unwrap(), "Hi demo");
    assert_eq!(fs::read_to_string(project.join("sub/b.txt")).unwrap(), "name: demo\n");
}

#[test]
fn test_questions_offer_all_templates_and_defaults() {
    let temp = TempDir::new().unwrap();
    let root = template_root(&temp);

    let mut prompter = ScriptedPrompter::new("lambda");
    GenerateCommand::new(options(temp.path(), &root, Some("toto")))
        .execute(&mut prompter)
        .unwrap();

    assert_eq!(prompter.asked.len(), 1);
    let questions = &prompter.asked[0];
    assert_eq!(questions.choices, vec!["lambda", "other"]);
    assert_eq!(questions.default_destination, temp.path());
    assert_eq!(questions.default_name.as_deref(), Some("toto"));
    assert!(temp.path().join("toto/a.txt").is_file());
}

#[test]
fn test_existing_project_dir_is_reused() {
    let temp = TempDir::new().unwrap();
    let root = template_root(&temp);
    fs::create_dir(temp.path().join("demo")).unwrap();
    fs::write(temp.path().join("demo/keep.txt"), "keep").unwrap();

    let mut prompter = ScriptedPrompter::new("lambda").named("demo");
    GenerateCommand::new(options(temp.path(), &root, None))
        .execute(&mut prompter)
        .unwrap();

    assert_eq!(fs::read_to_string(temp.path().join("demo/keep.txt")).unwrap(), "keep");
    assert!(temp.path().join("demo/a.txt").is_file());
}

#[test]
fn test_missing_destination_fails_before_prompting() {
    let temp = TempDir::new().unwrap();
    let root = template_root(&temp);
    let dest = temp.path().join("not/a/path");

    let mut prompter = ScriptedPrompter::new("lambda").named("demo");
    let err = GenerateCommand::new(options(&dest, &root, None))
        .execute(&mut prompter)
        .unwrap_err();

    assert_eq!(err.to_string(), format!("<{}> doesn't exist.", dest.display()));
    assert!(prompter.asked.is_empty());
}

#[test]
fn test_missing_template_root_fails_before_prompting() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("not/a/template/path");

    let mut prompter = ScriptedPrompter::new("lambda").named("demo");
    let err = GenerateCommand::new(options(temp.path(), &root, None))
        .execute(&mut prompter)
        .unwrap_err();

    assert_eq!(err.to_string(), format!("<{}> doesn't exist.", root.display()));
    assert!(prompter.asked.is_empty());
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_unknown_template_is_rejected() {
    let temp = TempDir::new().unwrap();
    let root = template_root(&temp);

    let mut prompter = ScriptedPrompter::new("missing").named("demo");
    let err = GenerateCommand::new(options(temp.path(), &root, None))
        .execute(&mut prompter)
        .unwrap_err();

    assert_eq!(err.to_string(), "Unknown template: missing");
    assert!(!temp.path().join("demo").exists());
}

#[test]
fn test_bundled_hello_world_template() {
    let temp = TempDir::new().unwrap();

    let options = GeneratorOptions {
        destination: Some(temp.path().to_path_buf()),
        ..GeneratorOptions::default()
    };
    let mut prompter = ScriptedPrompter::new("hello-world").named("my-lambda");
    let project = GenerateCommand::new(options).execute(&mut prompter).unwrap();

    let package = fs::read_to_string(project.join("package.json")).unwrap();
    assert!(package.contains("\"name\": \"my-lambda\""));
    let handler = fs::read_to_string(project.join("index.js")).unwrap();
    assert!(handler.contains("module.exports.handler"));
    assert!(handler.contains("Hello World from my-lambda"));
    assert!(!handler.contains("{{"));
}

#[test]
fn test_cli_exits_with_error_for_missing_destination() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("nowhere");

    let output = Command::new(env!("CARGO_BIN_EXE_generate"))
        .arg(&dest)
        .arg("demo")
        .env(TEMPLATES_PATH_ENV, template_root(&temp))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("<{}> doesn't exist.", dest.display())));
}

#[test]
fn test_cli_exits_with_error_for_missing_template_root() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("no-templates");

    let output = Command::new(env!("CARGO_BIN_EXE_generate"))
        .arg(temp.path())
        .env(TEMPLATES_PATH_ENV, &root)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("<{}> doesn't exist.", root.display())));
}

#[test]
fn test_prompt_failure_propagates_without_writes() {
    let temp = TempDir::new().unwrap();
    let root = template_root(&temp);

    let err = GenerateCommand::new(options(temp.path(), &root, Some("demo")))
        .execute(&mut FailingPrompter)
        .unwrap_err();

    assert_eq!(err.to_string(), "Prompt failed: IO error: boom");
    let entries: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![root.file_name().unwrap().to_os_string()]);
}

#[test]
fn test_project_path_occupied_by_file_fails() {
    let temp = TempDir::new().unwrap();
    let root = template_root(&temp);
    let project = temp.path().join("demo");
    fs::write(&project, "not a directory").unwrap();

    let mut prompter = ScriptedPrompter::new("lambda").named("demo");
    let err = GenerateCommand::new(options(temp.path(), &root, None))
        .execute(&mut prompter)
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GenerateError>(),
        Some(GenerateError::Io { path, .. }) if *path == project
    ));
    assert_eq!(fs::read_to_string(&project).unwrap(), "not a directory");
}

#[test]
fn test_foreign_braces_fail_the_run() {
    let temp = TempDir::new().unwrap();
    let root = template_root(&temp);
    fs::write(root.join("lambda/deploy.yml"), "key: ${{ secrets.AWS_KEY }}\n").unwrap();

    let mut prompter = ScriptedPrompter::new("lambda").named("demo");
    let err = GenerateCommand::new(options(temp.path(), &root, None))
        .execute(&mut prompter)
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GenerateError>(),
        Some(GenerateError::Render { .. })
    ));
}
