//! Advanced feature templates
//!
//! Websocket and HTMX ship one fragment set per framework; the remaining
//! features are framework agnostic.

/// Websocket imports shared by the `net/http` frameworks
pub const WEBSOCKET_IMPORTS: &str = r#""fmt"
"time"

"github.com/coder/websocket""#;

/// Websocket imports for Fiber
pub const WEBSOCKET_IMPORTS_FIBER: &str = r#""fmt"
"time"

"github.com/gofiber/contrib/websocket""#;

/// Websocket route for the standard library mux
pub const WEBSOCKET_ROUTE_STANDARD_LIBRARY: &str =
    r#"mux.HandleFunc("/websocket", s.websocketHandler)"#;

/// Websocket route for Chi
pub const WEBSOCKET_ROUTE_CHI: &str = r#"r.Get("/websocket", s.websocketHandler)"#;

/// Websocket route for Gin
pub const WEBSOCKET_ROUTE_GIN: &str = r#"r.GET("/websocket", s.websocketHandler)"#;

/// Websocket route for Gorilla mux
pub const WEBSOCKET_ROUTE_GORILLA: &str = r#"r.HandleFunc("/websocket", s.websocketHandler)"#;

/// Websocket route for httprouter
pub const WEBSOCKET_ROUTE_HTTP_ROUTER: &str =
    r#"r.HandlerFunc(http.MethodGet, "/websocket", s.websocketHandler)"#;

/// Websocket route for Echo
pub const WEBSOCKET_ROUTE_ECHO: &str = r#"e.GET("/websocket", s.websocketHandler)"#;

/// Websocket route for Fiber
pub const WEBSOCKET_ROUTE_FIBER: &str =
    r#"s.App.Get("/websocket", websocket.New(s.websocketHandler))"#;

/// Websocket handler for frameworks with `http.HandlerFunc` routes
pub const WEBSOCKET_HANDLER_HTTP: &str = r#"
func (s *Server) websocketHandler(w http.ResponseWriter, r *http.Request) {
	socket, err := websocket.Accept(w, r, nil)
	if err != nil {
		http.Error(w, "could not open websocket", http.StatusInternalServerError)
		return
	}
	defer socket.Close(websocket.StatusGoingAway, "server closing websocket")

	ctx := r.Context()
	socketCtx := socket.CloseRead(ctx)

	for {
		payload := fmt.Sprintf("server timestamp: %d", time.Now().UnixNano())
		if err := socket.Write(socketCtx, websocket.MessageText, []byte(payload)); err != nil {
			break
		}
		time.Sleep(time.Second * 2)
	}
}"#;

/// Websocket handler for Gin
pub const WEBSOCKET_HANDLER_GIN: &str = r#"
func (s *Server) websocketHandler(c *gin.Context) {
	w := c.Writer
	r := c.Request
	socket, err := websocket.Accept(w, r, nil)
	if err != nil {
		http.Error(w, "could not open websocket", http.StatusInternalServerError)
		return
	}
	defer socket.Close(websocket.StatusGoingAway, "server closing websocket")

	ctx := r.Context()
	socketCtx := socket.CloseRead(ctx)

	for {
		payload := fmt.Sprintf("server timestamp: %d", time.Now().UnixNano())
		if err := socket.Write(socketCtx, websocket.MessageText, []byte(payload)); err != nil {
			break
		}
		time.Sleep(time.Second * 2)
	}
}"#;

/// Websocket handler for Echo
pub const WEBSOCKET_HANDLER_ECHO: &str = r#"
func (s *Server) websocketHandler(c echo.Context) error {
	w := c.Response().Writer
	r := c.Request()
	socket, err := websocket.Accept(w, r, nil)
	if err != nil {
		return c.String(http.StatusInternalServerError, "could not open websocket")
	}
	defer socket.Close(websocket.StatusGoingAway, "server closing websocket")

	ctx := r.Context()
	socketCtx := socket.CloseRead(ctx)

	for {
		payload := fmt.Sprintf("server timestamp: %d", time.Now().UnixNano())
		if err := socket.Write(socketCtx, websocket.MessageText, []byte(payload)); err != nil {
			break
		}
		time.Sleep(time.Second * 2)
	}
	return nil
}"#;

/// Websocket handler for Fiber
pub const WEBSOCKET_HANDLER_FIBER: &str = r#"
func (s *FiberServer) websocketHandler(con *websocket.Conn) {
	for {
		payload := fmt.Sprintf("server timestamp: %d", time.Now().UnixNano())
		if err := con.WriteMessage(websocket.TextMessage, []byte(payload)); err != nil {
			break
		}
		time.Sleep(time.Second * 2)
	}
}"#;

/// HTMX imports shared by the `net/http` frameworks
pub const HTMX_IMPORTS: &str = r#""{ModulePath}/cmd/web"

"github.com/a-h/templ""#;

/// HTMX imports for Gin
pub const HTMX_IMPORTS_GIN: &str = r#""io/fs"

"{ModulePath}/cmd/web"

"github.com/a-h/templ""#;

/// HTMX imports for Fiber
pub const HTMX_IMPORTS_FIBER: &str = r#""net/http"

"{ModulePath}/cmd/web"

"github.com/a-h/templ"
"github.com/gofiber/fiber/v2/middleware/adaptor"
"github.com/gofiber/fiber/v2/middleware/filesystem""#;

/// HTMX routes for the standard library mux
pub const HTMX_ROUTES_STANDARD_LIBRARY: &str = r#"
fileServer := http.FileServer(http.FS(web.Files))
mux.Handle("/assets/", fileServer)
mux.Handle("/web", templ.Handler(web.HelloForm()))
mux.HandleFunc("/hello", web.HelloWebHandler)"#;

/// HTMX routes for Chi
pub const HTMX_ROUTES_CHI: &str = r#"
fileServer := http.FileServer(http.FS(web.Files))
r.Handle("/assets/*", fileServer)
r.Get("/web", templ.Handler(web.HelloForm()).ServeHTTP)
r.Post("/hello", web.HelloWebHandler)"#;

/// HTMX routes for Gin
pub const HTMX_ROUTES_GIN: &str = r#"
staticFiles, _ := fs.Sub(web.Files, "assets")
r.StaticFS("/assets", http.FS(staticFiles))

r.GET("/web", func(c *gin.Context) {
	templ.Handler(web.HelloForm()).ServeHTTP(c.Writer, c.Request)
})

r.POST("/hello", func(c *gin.Context) {
	web.HelloWebHandler(c.Writer, c.Request)
})"#;

/// HTMX routes for Gorilla mux
pub const HTMX_ROUTES_GORILLA: &str = r#"
fileServer := http.FileServer(http.FS(web.Files))
r.PathPrefix("/assets/").Handler(fileServer)
r.Handle("/web", templ.Handler(web.HelloForm()))
r.HandleFunc("/hello", web.HelloWebHandler).Methods(http.MethodPost)"#;

/// HTMX routes for httprouter
pub const HTMX_ROUTES_HTTP_ROUTER: &str = r#"
fileServer := http.FileServer(http.FS(web.Files))
r.Handler(http.MethodGet, "/assets/*filepath", fileServer)
r.Handler(http.MethodGet, "/web", templ.Handler(web.HelloForm()))
r.HandlerFunc(http.MethodPost, "/hello", web.HelloWebHandler)"#;

/// HTMX routes for Echo
pub const HTMX_ROUTES_ECHO: &str = r#"
fileServer := http.FileServer(http.FS(web.Files))
e.GET("/assets/*", echo.WrapHandler(fileServer))
e.GET("/web", echo.WrapHandler(templ.Handler(web.HelloForm())))
e.POST("/hello", echo.WrapHandler(http.HandlerFunc(web.HelloWebHandler)))"#;

/// HTMX routes for Fiber
pub const HTMX_ROUTES_FIBER: &str = r#"
s.App.Use("/assets", filesystem.New(filesystem.Config{
	Root:       http.FS(web.Files),
	PathPrefix: "assets",
	Browse:     false,
}))

s.App.Get("/web", adaptor.HTTPHandler(templ.Handler(web.HelloForm())))

s.App.Post("/hello", func(c *fiber.Ctx) error {
	return web.HelloWebHandler(c)
})"#;

/// `cmd/web/hello.go` for frameworks with `http.HandlerFunc` handlers
pub const HELLO_GO: &str = r#"package web

import (
	"log"
	"net/http"
)

func HelloWebHandler(w http.ResponseWriter, r *http.Request) {
	if err := r.ParseForm(); err != nil {
		http.Error(w, "Bad Request", http.StatusBadRequest)
		return
	}

	name := r.FormValue("name")
	component := HelloPost(name)
	if err := component.Render(r.Context(), w); err != nil {
		http.Error(w, err.Error(), http.StatusBadRequest)
		log.Printf("Error rendering in HelloWebHandler: %v", err)
	}
}
"#;

/// `cmd/web/hello.go` for Fiber
pub const HELLO_GO_FIBER: &str = r#"package web

import (
	"github.com/a-h/templ"
	"github.com/gofiber/fiber/v2"
	"github.com/gofiber/fiber/v2/middleware/adaptor"
)

func HelloWebHandler(c *fiber.Ctx) error {
	name := c.FormValue("name")
	component := HelloPost(name)
	return adaptor.HTTPHandler(templ.Handler(component))(c)
}
"#;

/// `cmd/web/base.templ`, the `{@head}` slot receives stylesheet links
pub const BASE_TEMPL: &str = r#"package web

templ Base() {
	<!DOCTYPE html>
	<html lang="en" class="h-screen">
		<head>
			<meta charset="utf-8"/>
			<meta name="viewport" content="width=device-width,initial-scale=1"/>
			<title>{ProjectName}</title>
			{@head}
			<script src="https://unpkg.com/htmx.org@2.0.4"></script>
			<script src="/assets/js/app.js"></script>
		</head>
		<body>
			<main class="max-w-sm mx-auto p-4">
				{ children... }
			</main>
		</body>
	</html>
}
"#;

/// `cmd/web/hello.templ`
pub const HELLO_TEMPL: &str = r##"package web

templ HelloForm() {
	@Base() {
		<form hx-post="/hello" method="POST" hx-target="#hello-container">
			<input class="bg-gray-200 text-black p-2 border border-gray-400 rounded-lg" id="name" name="name" type="text"/>
			<button type="submit" class="bg-orange-500 hover:bg-orange-700 text-white py-2 px-4 rounded">Submit</button>
		</form>
		<div id="hello-container"></div>
	}
}

templ HelloPost(name string) {
	<div class="bg-green-100 p-4 shadow-md rounded-lg mt-6">
		<p>Hello, { name }</p>
	</div>
}
"##;

/// `cmd/web/efs.go`
pub const EFS_GO: &str = r#"package web

import "embed"

//go:embed "assets"
var Files embed.FS
"#;

/// `cmd/web/assets/js/app.js`
pub const APP_JS: &str = r#"document.addEventListener("htmx:responseError", (event) => {
  console.error("request failed", event.detail.xhr.status);
});
"#;

/// Stylesheet link spliced into `base.templ`
pub const TAILWIND_HEAD: &str = r#"<link href="/assets/css/output.css" rel="stylesheet"/>"#;

/// `tailwind.config.js`
pub const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: ["./cmd/web/**/*.html", "./cmd/web/**/*.templ"],
  theme: {
    extend: {},
  },
  plugins: [],
};
"#;

/// `cmd/web/styles/input.css`
pub const TAILWIND_INPUT_CSS: &str = r"@tailwind base;
@tailwind components;
@tailwind utilities;
";

/// `Dockerfile`
pub const DOCKERFILE: &str = r#"FROM golang:1.23-alpine AS build

WORKDIR /app

COPY go.mod go.sum ./
RUN go mod download

COPY . .

RUN if [ -d cmd/web ]; then go install github.com/a-h/templ/cmd/templ@latest && templ generate; fi

RUN go build -o main cmd/api/main.go

FROM alpine:3.20.1 AS prod
WORKDIR /app
COPY --from=build /app/main /app/main
EXPOSE ${PORT}
CMD ["./main"]
"#;

/// `docker-compose.yml`, the `{@services}` slot receives database services
pub const DOCKER_COMPOSE: &str = r"services:
  app:
    build:
      context: .
      dockerfile: Dockerfile
      target: prod
    restart: unless-stopped
    ports:
      - ${PORT}:${PORT}
    env_file:
      - .env
  {@services}
";

/// `.github/workflows/release.yml`
pub const RELEASE_WORKFLOW: &str = r"name: goreleaser

on:
  push:
    tags:
      - 'v*.*.*'

permissions:
  contents: write

jobs:
  goreleaser:
    runs-on: ubuntu-latest
    steps:
      - name: Checkout
        uses: actions/checkout@v4
        with:
          fetch-depth: 0

      - name: Set up Go
        uses: actions/setup-go@v5
        with:
          go-version: '1.23.x'

      - name: Run GoReleaser
        uses: goreleaser/goreleaser-action@v6
        with:
          distribution: goreleaser
          version: latest
          args: release --clean
        env:
          GITHUB_TOKEN: ${{ secrets.GITHUB_TOKEN }}
";

/// `.github/workflows/go-test.yml`
pub const TEST_WORKFLOW: &str = r"name: Go-test

on: [push, pull_request]

jobs:
  build:
    runs-on: ubuntu-latest
    strategy:
      matrix:
        go-version: ['1.22.x', '1.23.x']

    steps:
      - uses: actions/checkout@v4

      - name: Setup Go ${{ matrix.go-version }}
        uses: actions/setup-go@v5
        with:
          go-version: ${{ matrix.go-version }}

      - name: Build
        run: go build -v ./...

      - name: Test with the Go CLI
        run: go test ./...
";

/// `.goreleaser.yml`
pub const GORELEASER: &str = r"version: 2

before:
  hooks:
    - go mod tidy

builds:
  - env:
      - CGO_ENABLED=0
    goos:
      - linux
      - windows
      - darwin
    main: ./cmd/api
    binary: app

archives:
  - format: tar.gz
    name_template: >-
      {{ .ProjectName }}_{{ .Version }}_{{ .Os }}_{{ .Arch }}
    format_overrides:
      - goos: windows
        format: zip

changelog:
  sort: asc
";

/// `cmd/worker/main.go`
pub const WORKER_MAIN: &str = r#"package main

import (
	"log"
	"os"

	"{ModulePath}/cmd/worker/tasks"

	"github.com/hibiken/asynq"
	_ "github.com/joho/godotenv/autoload"
)

func main() {
	srv := asynq.NewServer(
		asynq.RedisClientOpt{Addr: os.Getenv("BLUEPRINT_WORKER_REDIS_ADDR")},
		asynq.Config{
			Concurrency: 10,
			Queues: map[string]int{
				"critical": 6,
				"default":  3,
				"low":      1,
			},
		},
	)

	mux := asynq.NewServeMux()
	mux.HandleFunc(tasks.TypeHelloWorld, tasks.HandleHelloWorldTask)

	if err := srv.Run(mux); err != nil {
		log.Fatalf("could not run server: %v", err)
	}
}
"#;

/// `cmd/worker/tasks/hello_world_task.go`
pub const WORKER_HELLO_TASK: &str = r#"package tasks

import (
	"context"
	"encoding/json"
	"fmt"
	"log"

	"github.com/hibiken/asynq"
)

const TypeHelloWorld = "hello:world"

type HelloWorldPayload struct {
	Name string
}

func NewHelloWorldTask(name string) (*asynq.Task, error) {
	payload, err := json.Marshal(HelloWorldPayload{Name: name})
	if err != nil {
		return nil, err
	}
	return asynq.NewTask(TypeHelloWorld, payload), nil
}

func HandleHelloWorldTask(ctx context.Context, t *asynq.Task) error {
	var p HelloWorldPayload
	if err := json.Unmarshal(t.Payload(), &p); err != nil {
		return fmt.Errorf("json.Unmarshal failed: %v: %w", err, asynq.SkipRetry)
	}
	log.Printf("Hello, %s", p.Name)
	return nil
}
"#;

/// `.env` lines for the worker
pub const WORKER_ENV: &str = r"BLUEPRINT_WORKER_REDIS_ADDR=localhost:6379
";
