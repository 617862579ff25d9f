//! Technology detection heuristics for sample projects.
//!
//! Substring checks over the Dockerfile (base images, install lines) and
//! the compose file (service images). Deliberately simple: the catalog only
//! needs a coarse technology list for search and display.

/// Detect technologies from a project's Dockerfile and compose contents.
///
/// Results keep a stable order (languages, then frameworks, then services)
/// and contain no duplicates.
pub fn detect_technologies(dockerfile: &str, compose: &str) -> Vec<String> {
    let mut technologies: Vec<String> = Vec::new();
    let mut add = |name: &str| {
        if !technologies.iter().any(|t| t == name) {
            technologies.push(name.to_string());
        }
    };

    // Base images
    if dockerfile.contains("FROM python") {
        add("Python");
    }
    if dockerfile.contains("FROM node") {
        add("Node.js");
    }
    if dockerfile.contains("FROM golang") {
        add("Go");
    }
    if dockerfile.contains("FROM php") {
        add("PHP");
    }
    if dockerfile.contains("FROM ruby") {
        add("Ruby");
    }
    if dockerfile.contains("FROM rust") {
        add("Rust");
    }

    // Frameworks and libraries named in install lines
    let dockerfile_lower = dockerfile.to_lowercase();
    if dockerfile.contains("pip install") {
        if dockerfile_lower.contains("flask") {
            add("Flask");
        }
        if dockerfile_lower.contains("django") {
            add("Django");
        }
    }
    if dockerfile.contains("npm install") {
        if dockerfile_lower.contains("react") {
            add("React");
        }
        if dockerfile_lower.contains("express") {
            add("Express.js");
        }
        if dockerfile_lower.contains("next") {
            add("Next.js");
        }
    }

    // Backing services from the compose file
    let compose_lower = compose.to_lowercase();
    if compose_lower.contains("postgres") {
        add("PostgreSQL");
    }
    if compose_lower.contains("mysql") {
        add("MySQL");
    }
    if compose_lower.contains("redis") {
        add("Redis");
    }
    if compose_lower.contains("mongodb") {
        add("MongoDB");
    }

    technologies
}

/// Generate a one-line description from the project name and technologies.
pub fn generate_description(project_name: &str, technologies: &[String]) -> String {
    if technologies.is_empty() {
        return format!("A containerized application that demonstrates how to deploy a {project_name} project.");
    }
    let tech_str = technologies.join(", ");
    format!("A {tech_str} application that demonstrates how to deploy a {project_name} project.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_base_images() {
        let techs = detect_technologies("FROM python:3.12-slim\nRUN true", "");
        assert_eq!(techs, vec!["Python"]);
    }

    #[test]
    fn detects_frameworks_from_install_lines() {
        let dockerfile = "FROM python:3.12\nRUN pip install flask gunicorn";
        let techs = detect_technologies(dockerfile, "");
        assert_eq!(techs, vec!["Python", "Flask"]);
    }

    #[test]
    fn detects_compose_services() {
        let compose = "services:\n  db:\n    image: postgres:16\n  cache:\n    image: redis:7";
        let techs = detect_technologies("", compose);
        assert_eq!(techs, vec!["PostgreSQL", "Redis"]);
    }

    #[test]
    fn no_duplicates_when_mentioned_twice() {
        let compose = "services:\n  a:\n    image: redis\n  b:\n    image: redis";
        let techs = detect_technologies("", compose);
        assert_eq!(techs, vec!["Redis"]);
    }

    #[test]
    fn description_mentions_technologies() {
        let desc = generate_description("flask-demo", &["Python".into(), "Flask".into()]);
        assert_eq!(
            desc,
            "A Python, Flask application that demonstrates how to deploy a flask-demo project."
        );
    }

    #[test]
    fn description_without_technologies() {
        let desc = generate_description("mystery", &[]);
        assert!(desc.contains("containerized"));
        assert!(desc.contains("mystery"));
    }
}
