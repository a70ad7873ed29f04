//! Files every generated project receives, plus the build tool files

/// `README.md`
pub const README: &str = r"# {ProjectName}

One Paragraph of project description goes here

## Getting Started

These instructions will get you a copy of the project up and running on your local machine for development and testing purposes.

## MakeFile

Run build make command with tests
```bash
make all
```

Build the application
```bash
make build
```

Run the application
```bash
make run
```

Live reload the application:
```bash
make watch
```

Run the test suite:
```bash
make test
```

Clean up binary from the last build:
```bash
make clean
```
";

/// `.gitignore`
pub const GITIGNORE: &str = r"# Binaries for programs and plugins
*.exe
*.exe~
*.dll
*.so
*.dylib
main

# Test binary, built with `go test -c`
*.test

# Output of the go coverage tool
*.out

# Dependency directories
vendor/

# Go workspace file
go.work
tmp/

# IDE specific files
.vscode
.idea

# .env file
.env

# Project build
*templ.go

# Local database volumes
.data/

# Frontend
node_modules/
dist/
";

/// `.air.toml`
pub const AIR_TOML: &str = r#"root = "."
testdata_dir = "testdata"
tmp_dir = "tmp"

[build]
  args_bin = []
  bin = "./main"
  cmd = "make build"
  delay = 1000
  exclude_dir = ["assets", "tmp", "vendor", "testdata", "node_modules"]
  exclude_file = []
  exclude_regex = ["_test.go", ".*_templ.go"]
  exclude_unchanged = false
  follow_symlink = false
  full_bin = ""
  include_dir = []
  include_ext = ["go", "tpl", "tmpl", "templ", "html"]
  include_file = []
  kill_delay = "0s"
  log = "build-errors.log"
  poll = false
  poll_interval = 0
  post_cmd = []
  pre_cmd = []
  rerun = false
  rerun_delay = 500
  send_interrupt = false
  stop_on_error = false

[color]
  app = ""
  build = "yellow"
  main = "magenta"
  runner = "green"
  watcher = "cyan"

[log]
  main_only = false
  time = false

[misc]
  clean_on_exit = false

[screen]
  clear_on_rebuild = false
  keep_scroll = true
"#;

/// Base `.env` lines
pub const ENV: &str = r"PORT={Port}
APP_ENV=local
";

/// `Makefile`
pub const MAKEFILE: &str = r#"# Simple Makefile for a Go project

# Build the application
all: build test

build:
	@echo "Building..."
	@if [ -d cmd/web ]; then templ generate; fi
	@go build -o main cmd/api/main.go

# Run the application
run:
	@go run cmd/api/main.go

# Test the application
test:
	@echo "Testing..."
	@go test ./... -v

# Clean the binary
clean:
	@echo "Cleaning..."
	@rm -f main

# Live Reload
watch:
	@if command -v air > /dev/null; then \
		air; \
		echo "Watching..."; \
	else \
		echo "air is not installed, see https://github.com/air-verse/air"; \
	fi

.PHONY: all build run test clean watch
"#;

/// `Makefile` with docker compose targets
pub const MAKEFILE_WITH_DOCKER: &str = r#"# Simple Makefile for a Go project

# Build the application
all: build test

build:
	@echo "Building..."
	@if [ -d cmd/web ]; then templ generate; fi
	@go build -o main cmd/api/main.go

# Run the application
run:
	@go run cmd/api/main.go

# Create DB container
docker-run:
	@if docker compose up --build 2>/dev/null; then \
		: ; \
	else \
		echo "Falling back to Docker Compose V1"; \
		docker-compose up --build; \
	fi

# Shutdown DB container
docker-down:
	@if docker compose down 2>/dev/null; then \
		: ; \
	else \
		echo "Falling back to Docker Compose V1"; \
		docker-compose down; \
	fi

# Test the application
test:
	@echo "Testing..."
	@go test ./... -v

# Clean the binary
clean:
	@echo "Cleaning..."
	@rm -f main

# Live Reload
watch:
	@if command -v air > /dev/null; then \
		air; \
		echo "Watching..."; \
	else \
		echo "air is not installed, see https://github.com/air-verse/air"; \
	fi

.PHONY: all build run test clean watch docker-run docker-down
"#;

/// `justfile`
pub const JUSTFILE: &str = r#"# Simple justfile for a Go project

# Build the application
all: build test

build:
    @echo "Building..."
    @if [ -d cmd/web ]; then templ generate; fi
    @go build -o main cmd/api/main.go

# Run the application
run:
    @go run cmd/api/main.go

# Test the application
test:
    @echo "Testing..."
    @go test ./... -v

# Clean the binary
clean:
    @echo "Cleaning..."
    @rm -f main

# Live Reload
watch:
    air
"#;

/// `justfile` with docker compose recipes
pub const JUSTFILE_WITH_DOCKER: &str = r#"# Simple justfile for a Go project

# Build the application
all: build test

build:
    @echo "Building..."
    @if [ -d cmd/web ]; then templ generate; fi
    @go build -o main cmd/api/main.go

# Run the application
run:
    @go run cmd/api/main.go

# Create DB container
docker-run:
    docker compose up --build

# Shutdown DB container
docker-down:
    docker compose down

# Test the application
test:
    @echo "Testing..."
    @go test ./... -v

# Clean the binary
clean:
    @echo "Cleaning..."
    @rm -f main

# Live Reload
watch:
    air
"#;
