//! Integration tests for the gallery CLI

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::path::{Path, PathBuf};
    use std::thread::{self, JoinHandle};
    use tempfile::TempDir;

    /// Isolated config + session file for one test
    struct Sandbox {
        dir: TempDir,
    }

    impl Sandbox {
        fn new(base_url: &str) -> Self {
            let dir = TempDir::new().unwrap();
            let session = dir.path().join("session.json");
            let config = format!(
                "[general]\naudit_log = false\n\n[api]\nbase_url = \"{}\"\ntimeout_secs = 5\n\n[storage]\npath = {:?}\n",
                base_url,
                session.display().to_string()
            );
            std::fs::write(dir.path().join("config.toml"), config).unwrap();
            Self { dir }
        }

        fn offline() -> Self {
            Self::new("http://127.0.0.1:9")
        }

        fn config_path(&self) -> PathBuf {
            self.dir.path().join("config.toml")
        }

        fn session_path(&self) -> PathBuf {
            self.dir.path().join("session.json")
        }

        fn gallery(&self) -> Command {
            let mut cmd = cargo_bin_cmd!("gallery");
            cmd.env("GALLERY_CONFIG", self.config_path())
                .env_remove("GALLERY_PASSWORD")
                .env_remove("RUST_LOG")
                .env("CI", "1");
            cmd
        }

        fn write_session(&self, json: &str) {
            std::fs::write(self.session_path(), json).unwrap();
        }
    }

    /// Answer exactly one HTTP request, returning the raw request text
    fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request
        });

        (format!("http://{}", addr), handle)
    }

    fn read_request(stream: &mut impl Read) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(end) = text.find("\r\n\r\n") {
                let content_length = text[..end]
                    .lines()
                    .find_map(|l| {
                        let (name, value) = l.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).to_string()
    }

    fn read_session(path: &Path) -> serde_json::Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn help_displays() {
        cargo_bin_cmd!("gallery")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("photo gallery"));
    }

    #[test]
    fn version_displays() {
        cargo_bin_cmd!("gallery")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("gallery"));
    }

    #[test]
    fn config_path_and_show() {
        let sandbox = Sandbox::offline();

        sandbox
            .gallery()
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));

        sandbox
            .gallery()
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[api]"))
            .stdout(predicate::str::contains("timeout_secs = 5"));
    }

    #[test]
    fn config_set_persists() {
        let sandbox = Sandbox::offline();

        sandbox
            .gallery()
            .args(["config", "set", "api.timeout_secs", "12"])
            .assert()
            .success();

        let content = std::fs::read_to_string(sandbox.config_path()).unwrap();
        assert!(content.contains("timeout_secs = 12"));
    }

    #[test]
    fn whoami_without_session() {
        Sandbox::offline()
            .gallery()
            .arg("whoami")
            .assert()
            .success()
            .stdout(predicate::str::contains("Not logged in"));
    }

    #[test]
    fn whoami_with_restored_token_only() {
        let sandbox = Sandbox::offline();
        sandbox.write_session(r#"{"token":"T1","refresh":"R1"}"#);

        sandbox
            .gallery()
            .arg("whoami")
            .assert()
            .success()
            .stdout(predicate::str::contains("(unknown identity)"));
    }

    #[test]
    fn pages_require_login() {
        let sandbox = Sandbox::offline();

        for args in [vec!["home"], vec!["album", "a1"], vec!["photo", "p1"]] {
            sandbox
                .gallery()
                .args(args)
                .assert()
                .failure()
                .stderr(predicate::str::contains("Not logged in"))
                .stderr(predicate::str::contains("gallery login"));
        }
    }

    #[test]
    fn login_requires_email_when_not_interactive() {
        Sandbox::offline()
            .gallery()
            .args(["login", "--password", "secret"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--email is required"));
    }

    #[test]
    fn signup_rejects_weak_password_locally() {
        Sandbox::offline()
            .gallery()
            .args(["signup", "-u", "ada", "-e", "a@x.com", "-p", "weak"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Password must be 8+ characters"));
    }

    #[test]
    fn login_unreachable_server() {
        let sandbox = Sandbox::offline();

        sandbox
            .gallery()
            .args(["login", "-e", "a@x.com", "-p", "secret"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Login failed"));

        assert!(!sandbox.session_path().exists());
    }

    #[test]
    fn login_stores_session() {
        let (url, server) = serve_once("200 OK", r#"{"access":"T1","refresh":"R1"}"#);
        let sandbox = Sandbox::new(&url);

        sandbox
            .gallery()
            .args(["login", "-e", "a@x.com", "-p", "secret"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Logged in as a@x.com"));

        let request = server.join().unwrap();
        assert!(request.starts_with("POST /api/user/login/"));
        assert!(request.contains(r#""email":"a@x.com""#));

        let session = read_session(&sandbox.session_path());
        assert_eq!(session["token"], "T1");
        assert_eq!(session["refresh"], "R1");
        assert_eq!(session["email"], "a@x.com");

        sandbox
            .gallery()
            .arg("whoami")
            .assert()
            .success()
            .stdout(predicate::str::contains("a@x.com"));
    }

    #[test]
    fn login_rejected_shows_detail() {
        let (url, server) = serve_once("400 Bad Request", r#"{"detail":"Invalid credentials"}"#);
        let sandbox = Sandbox::new(&url);

        sandbox
            .gallery()
            .args(["login", "-e", "a@x.com", "-p", "wrong"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid credentials"));

        server.join().unwrap();
        assert!(!sandbox.session_path().exists());
    }

    #[test]
    fn logout_revokes_and_clears() {
        let (url, server) = serve_once("205 Reset Content", "");
        let sandbox = Sandbox::new(&url);
        sandbox.write_session(r#"{"token":"T1","refresh":"R1","email":"a@x.com"}"#);

        sandbox
            .gallery()
            .arg("logout")
            .assert()
            .success()
            .stdout(predicate::str::contains("Logged out"));

        let request = server.join().unwrap();
        assert!(request.starts_with("POST /api/user/logout/"));
        assert!(request.to_lowercase().contains("authorization: bearer t1"));
        assert!(request.contains(r#""refresh":"R1""#));
        assert!(!sandbox.session_path().exists());
    }

    #[test]
    fn logout_clears_even_when_server_unreachable() {
        let sandbox = Sandbox::offline();
        sandbox.write_session(r#"{"token":"T1","refresh":"R1"}"#);

        sandbox.gallery().arg("logout").assert().success();

        assert!(!sandbox.session_path().exists());
    }

    #[test]
    fn completions_generate() {
        cargo_bin_cmd!("gallery")
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("gallery"));
    }
}
