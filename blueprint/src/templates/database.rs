//! Database driver templates
//!
//! Each driver supplies `internal/database/database.go`, its `.env` lines and,
//! except `SQLite`, a service block for `docker-compose.yml`.

/// `internal/database/database.go` for `PostgreSQL`
pub const POSTGRES_SERVICE: &str = r#"package database

import (
	"context"
	"database/sql"
	"fmt"
	"log"
	"os"
	"strconv"
	"time"

	_ "github.com/joho/godotenv/autoload"
	_ "github.com/lib/pq"
)

// Service represents a service that interacts with a database.
type Service interface {
	// Health returns a map of health status information.
	Health() map[string]string

	// Close terminates the database connection.
	Close() error
}

type service struct {
	db *sql.DB
}

var (
	database   = os.Getenv("BLUEPRINT_DB_DATABASE")
	password   = os.Getenv("BLUEPRINT_DB_PASSWORD")
	username   = os.Getenv("BLUEPRINT_DB_USERNAME")
	port       = os.Getenv("BLUEPRINT_DB_PORT")
	host       = os.Getenv("BLUEPRINT_DB_HOST")
	schema     = os.Getenv("BLUEPRINT_DB_SCHEMA")
	dbInstance *service
)

func New() Service {
	if dbInstance != nil {
		return dbInstance
	}
	connStr := fmt.Sprintf("postgres://%s:%s@%s:%s/%s?sslmode=disable&search_path=%s", username, password, host, port, database, schema)
	db, err := sql.Open("postgres", connStr)
	if err != nil {
		log.Fatal(err)
	}
	dbInstance = &service{
		db: db,
	}
	return dbInstance
}

// Health checks the health of the database connection by pinging the database.
func (s *service) Health() map[string]string {
	ctx, cancel := context.WithTimeout(context.Background(), 1*time.Second)
	defer cancel()

	stats := make(map[string]string)

	err := s.db.PingContext(ctx)
	if err != nil {
		stats["status"] = "down"
		stats["error"] = fmt.Sprintf("db down: %v", err)
		log.Printf("db down: %v", err)
		return stats
	}

	stats["status"] = "up"
	stats["message"] = "It's healthy"

	dbStats := s.db.Stats()
	stats["open_connections"] = strconv.Itoa(dbStats.OpenConnections)
	stats["in_use"] = strconv.Itoa(dbStats.InUse)
	stats["idle"] = strconv.Itoa(dbStats.Idle)

	return stats
}

// Close closes the database connection.
func (s *service) Close() error {
	log.Printf("Disconnected from database: %s", database)
	return s.db.Close()
}
"#;

/// `.env` lines for `PostgreSQL`
pub const POSTGRES_ENV: &str = r"BLUEPRINT_DB_HOST={DatabaseHost}
BLUEPRINT_DB_PORT={DatabasePort}
BLUEPRINT_DB_DATABASE={DatabaseName}
BLUEPRINT_DB_USERNAME=melkey
BLUEPRINT_DB_PASSWORD=password1234
BLUEPRINT_DB_SCHEMA=public
";

/// Compose service for `PostgreSQL`
pub const POSTGRES_COMPOSE: &str = r#"psql_bp:
  image: postgres:latest
  restart: unless-stopped
  environment:
    POSTGRES_DB: ${BLUEPRINT_DB_DATABASE}
    POSTGRES_USER: ${BLUEPRINT_DB_USERNAME}
    POSTGRES_PASSWORD: ${BLUEPRINT_DB_PASSWORD}
  ports:
    - "${BLUEPRINT_DB_PORT}:5432"
  volumes:
    - ./.data/postgres:/var/lib/postgresql/data
  healthcheck:
    test: ["CMD-SHELL", "sh -c 'pg_isready -U ${BLUEPRINT_DB_USERNAME} -d ${BLUEPRINT_DB_DATABASE}'"]
    interval: 5s
    timeout: 5s
    retries: 3
    start_period: 15s
"#;

/// Testcontainers suite for `PostgreSQL`
pub const POSTGRES_INTEGRATION_TEST: &str = r#"package database

import (
	"context"
	"log"
	"testing"
	"time"

	"github.com/testcontainers/testcontainers-go"
	"github.com/testcontainers/testcontainers-go/modules/postgres"
	"github.com/testcontainers/testcontainers-go/wait"
)

func mustStartPostgresContainer() (func(context.Context, ...testcontainers.TerminateOption) error, error) {
	var (
		dbName = "database"
		dbPwd  = "password"
		dbUser = "user"
	)

	dbContainer, err := postgres.Run(
		context.Background(),
		"postgres:latest",
		postgres.WithDatabase(dbName),
		postgres.WithUsername(dbUser),
		postgres.WithPassword(dbPwd),
		testcontainers.WithWaitStrategy(
			wait.ForLog("database system is ready to accept connections").
				WithOccurrence(2).
				WithStartupTimeout(5*time.Second)),
	)
	if err != nil {
		return nil, err
	}

	database = dbName
	password = dbPwd
	username = dbUser

	dbHost, err := dbContainer.Host(context.Background())
	if err != nil {
		return dbContainer.Terminate, err
	}

	dbPort, err := dbContainer.MappedPort(context.Background(), "5432/tcp")
	if err != nil {
		return dbContainer.Terminate, err
	}

	host = dbHost
	port = dbPort.Port()

	return dbContainer.Terminate, err
}

func TestMain(m *testing.M) {
	teardown, err := mustStartPostgresContainer()
	if err != nil {
		log.Fatalf("could not start postgres container: %v", err)
	}

	m.Run()

	if teardown != nil && teardown(context.Background()) != nil {
		log.Fatalf("could not teardown postgres container: %v", err)
	}
}

func TestNew(t *testing.T) {
	srv := New()
	if srv == nil {
		t.Fatal("New() returned nil")
	}
}

func TestHealth(t *testing.T) {
	srv := New()

	stats := srv.Health()

	if stats["status"] != "up" {
		t.Fatalf("expected status to be up, got %s", stats["status"])
	}
}

func TestClose(t *testing.T) {
	srv := New()

	if srv.Close() != nil {
		t.Fatalf("expected Close() to return nil")
	}
}
"#;

/// `internal/database/database.go` for `MySQL`
pub const MYSQL_SERVICE: &str = r#"package database

import (
	"context"
	"database/sql"
	"fmt"
	"log"
	"os"
	"strconv"
	"time"

	_ "github.com/go-sql-driver/mysql"
	_ "github.com/joho/godotenv/autoload"
)

// Service represents a service that interacts with a database.
type Service interface {
	// Health returns a map of health status information.
	Health() map[string]string

	// Close terminates the database connection.
	Close() error
}

type service struct {
	db *sql.DB
}

var (
	dbname     = os.Getenv("BLUEPRINT_DB_DATABASE")
	password   = os.Getenv("BLUEPRINT_DB_PASSWORD")
	username   = os.Getenv("BLUEPRINT_DB_USERNAME")
	port       = os.Getenv("BLUEPRINT_DB_PORT")
	host       = os.Getenv("BLUEPRINT_DB_HOST")
	dbInstance *service
)

func New() Service {
	if dbInstance != nil {
		return dbInstance
	}

	db, err := sql.Open("mysql", fmt.Sprintf("%s:%s@tcp(%s:%s)/%s?parseTime=true", username, password, host, port, dbname))
	if err != nil {
		log.Fatal(err)
	}
	db.SetConnMaxLifetime(0)
	db.SetMaxIdleConns(50)
	db.SetMaxOpenConns(50)

	dbInstance = &service{
		db: db,
	}
	return dbInstance
}

// Health checks the health of the database connection by pinging the database.
func (s *service) Health() map[string]string {
	ctx, cancel := context.WithTimeout(context.Background(), 1*time.Second)
	defer cancel()

	stats := make(map[string]string)

	err := s.db.PingContext(ctx)
	if err != nil {
		stats["status"] = "down"
		stats["error"] = fmt.Sprintf("db down: %v", err)
		log.Printf("db down: %v", err)
		return stats
	}

	stats["status"] = "up"
	stats["message"] = "It's healthy"

	dbStats := s.db.Stats()
	stats["open_connections"] = strconv.Itoa(dbStats.OpenConnections)
	stats["in_use"] = strconv.Itoa(dbStats.InUse)
	stats["idle"] = strconv.Itoa(dbStats.Idle)

	return stats
}

// Close closes the database connection.
func (s *service) Close() error {
	log.Printf("Disconnected from database: %s", dbname)
	return s.db.Close()
}
"#;

/// `.env` lines for `MySQL`
pub const MYSQL_ENV: &str = r"BLUEPRINT_DB_HOST={DatabaseHost}
BLUEPRINT_DB_PORT={DatabasePort}
BLUEPRINT_DB_DATABASE={DatabaseName}
BLUEPRINT_DB_USERNAME=melkey
BLUEPRINT_DB_PASSWORD=password1234
BLUEPRINT_DB_ROOT_PASSWORD=password4321
";

/// Compose service for `MySQL`
pub const MYSQL_COMPOSE: &str = r#"mysql_bp:
  image: mysql:latest
  restart: unless-stopped
  environment:
    MYSQL_DATABASE: ${BLUEPRINT_DB_DATABASE}
    MYSQL_USER: ${BLUEPRINT_DB_USERNAME}
    MYSQL_PASSWORD: ${BLUEPRINT_DB_PASSWORD}
    MYSQL_ROOT_PASSWORD: ${BLUEPRINT_DB_ROOT_PASSWORD}
  ports:
    - "${BLUEPRINT_DB_PORT}:3306"
  volumes:
    - ./.data/mysql:/var/lib/mysql
  healthcheck:
    test: ["CMD", "mysqladmin", "ping", "-h", "${BLUEPRINT_DB_HOST}", "-u", "${BLUEPRINT_DB_USERNAME}", "--password=${BLUEPRINT_DB_PASSWORD}"]
    interval: 5s
    timeout: 5s
    retries: 3
    start_period: 15s
"#;

/// Testcontainers suite for `MySQL`
pub const MYSQL_INTEGRATION_TEST: &str = r#"package database

import (
	"context"
	"log"
	"testing"
	"time"

	"github.com/testcontainers/testcontainers-go"
	"github.com/testcontainers/testcontainers-go/modules/mysql"
	"github.com/testcontainers/testcontainers-go/wait"
)

func mustStartMySQLContainer() (func(context.Context, ...testcontainers.TerminateOption) error, error) {
	var (
		dbName = "test"
		dbPwd  = "password"
		dbUser = "user"
	)

	dbContainer, err := mysql.Run(context.Background(),
		"mysql:8.0.36",
		mysql.WithDatabase(dbName),
		mysql.WithUsername(dbUser),
		mysql.WithPassword(dbPwd),
		testcontainers.WithWaitStrategy(wait.ForLog("port: 3306  MySQL Community Server - GPL").WithStartupTimeout(30*time.Second)),
	)
	if err != nil {
		return nil, err
	}

	dbname = dbName
	password = dbPwd
	username = dbUser

	dbHost, err := dbContainer.Host(context.Background())
	if err != nil {
		return dbContainer.Terminate, err
	}

	dbPort, err := dbContainer.MappedPort(context.Background(), "3306/tcp")
	if err != nil {
		return dbContainer.Terminate, err
	}

	host = dbHost
	port = dbPort.Port()

	return dbContainer.Terminate, err
}

func TestMain(m *testing.M) {
	teardown, err := mustStartMySQLContainer()
	if err != nil {
		log.Fatalf("could not start mysql container: %v", err)
	}

	m.Run()

	if teardown != nil && teardown(context.Background()) != nil {
		log.Fatalf("could not teardown mysql container: %v", err)
	}
}

func TestHealth(t *testing.T) {
	srv := New()

	stats := srv.Health()

	if stats["status"] != "up" {
		t.Fatalf("expected status to be up, got %s", stats["status"])
	}
}
"#;

/// `internal/database/database.go` for `SQLite`
pub const SQLITE_SERVICE: &str = r#"package database

import (
	"context"
	"database/sql"
	"fmt"
	"log"
	"os"
	"strconv"
	"time"

	_ "github.com/joho/godotenv/autoload"
	_ "github.com/mattn/go-sqlite3"
)

// Service represents a service that interacts with a database.
type Service interface {
	// Health returns a map of health status information.
	Health() map[string]string

	// Close terminates the database connection.
	Close() error
}

type service struct {
	db *sql.DB
}

var (
	dburl      = os.Getenv("BLUEPRINT_DB_URL")
	dbInstance *service
)

func New() Service {
	if dbInstance != nil {
		return dbInstance
	}

	db, err := sql.Open("sqlite3", dburl)
	if err != nil {
		log.Fatal(err)
	}

	dbInstance = &service{
		db: db,
	}
	return dbInstance
}

// Health checks the health of the database connection by pinging the database.
func (s *service) Health() map[string]string {
	ctx, cancel := context.WithTimeout(context.Background(), 1*time.Second)
	defer cancel()

	stats := make(map[string]string)

	err := s.db.PingContext(ctx)
	if err != nil {
		stats["status"] = "down"
		stats["error"] = fmt.Sprintf("db down: %v", err)
		log.Printf("db down: %v", err)
		return stats
	}

	stats["status"] = "up"
	stats["message"] = "It's healthy"

	dbStats := s.db.Stats()
	stats["open_connections"] = strconv.Itoa(dbStats.OpenConnections)
	stats["in_use"] = strconv.Itoa(dbStats.InUse)

	return stats
}

// Close closes the database connection.
func (s *service) Close() error {
	log.Printf("Disconnected from database: %s", dburl)
	return s.db.Close()
}
"#;

/// `.env` lines for `SQLite`
pub const SQLITE_ENV: &str = r"BLUEPRINT_DB_URL=./{DatabaseName}.db
";

/// `internal/database/database.go` for SQL Server
pub const SQLSERVER_SERVICE: &str = r#"package database

import (
	"context"
	"database/sql"
	"fmt"
	"log"
	"os"
	"strconv"
	"time"

	_ "github.com/joho/godotenv/autoload"
	_ "github.com/microsoft/go-mssqldb"
)

// Service represents a service that interacts with a database.
type Service interface {
	// Health returns a map of health status information.
	Health() map[string]string

	// Close terminates the database connection.
	Close() error
}

type service struct {
	db *sql.DB
}

var (
	database   = os.Getenv("BLUEPRINT_DB_DATABASE")
	password   = os.Getenv("BLUEPRINT_DB_PASSWORD")
	username   = os.Getenv("BLUEPRINT_DB_USERNAME")
	port       = os.Getenv("BLUEPRINT_DB_PORT")
	host       = os.Getenv("BLUEPRINT_DB_HOST")
	dbInstance *service
)

func New() Service {
	if dbInstance != nil {
		return dbInstance
	}

	connStr := fmt.Sprintf("sqlserver://%s:%s@%s:%s?database=%s", username, password, host, port, database)
	db, err := sql.Open("sqlserver", connStr)
	if err != nil {
		log.Fatal(err)
	}

	dbInstance = &service{
		db: db,
	}
	return dbInstance
}

// Health checks the health of the database connection by pinging the database.
func (s *service) Health() map[string]string {
	ctx, cancel := context.WithTimeout(context.Background(), 1*time.Second)
	defer cancel()

	stats := make(map[string]string)

	err := s.db.PingContext(ctx)
	if err != nil {
		stats["status"] = "down"
		stats["error"] = fmt.Sprintf("db down: %v", err)
		log.Printf("db down: %v", err)
		return stats
	}

	stats["status"] = "up"
	stats["message"] = "It's healthy"

	dbStats := s.db.Stats()
	stats["open_connections"] = strconv.Itoa(dbStats.OpenConnections)
	stats["in_use"] = strconv.Itoa(dbStats.InUse)

	return stats
}

// Close closes the database connection.
func (s *service) Close() error {
	log.Printf("Disconnected from database: %s", database)
	return s.db.Close()
}
"#;

/// `.env` lines for SQL Server
pub const SQLSERVER_ENV: &str = r"BLUEPRINT_DB_HOST={DatabaseHost}
BLUEPRINT_DB_PORT={DatabasePort}
BLUEPRINT_DB_DATABASE={DatabaseName}
BLUEPRINT_DB_USERNAME=sa
BLUEPRINT_DB_PASSWORD=Password1234!
";

/// Compose service for SQL Server
pub const SQLSERVER_COMPOSE: &str = r#"mssql_bp:
  image: mcr.microsoft.com/mssql/server:2022-latest
  restart: unless-stopped
  environment:
    ACCEPT_EULA: "Y"
    MSSQL_SA_PASSWORD: ${BLUEPRINT_DB_PASSWORD}
  ports:
    - "${BLUEPRINT_DB_PORT}:1433"
  volumes:
    - ./.data/mssql:/var/opt/mssql
"#;

/// `internal/database/database.go` for `MongoDB`
pub const MONGO_SERVICE: &str = r#"package database

import (
	"context"
	"fmt"
	"log"
	"os"
	"time"

	_ "github.com/joho/godotenv/autoload"
	"go.mongodb.org/mongo-driver/mongo"
	"go.mongodb.org/mongo-driver/mongo/options"
)

// Service represents a service that interacts with a database.
type Service interface {
	// Health returns a map of health status information.
	Health() map[string]string

	// Close terminates the database connection.
	Close() error
}

type service struct {
	db *mongo.Client
}

var (
	host = os.Getenv("BLUEPRINT_DB_HOST")
	port = os.Getenv("BLUEPRINT_DB_PORT")
)

func New() Service {
	client, err := mongo.Connect(context.Background(), options.Client().ApplyURI(fmt.Sprintf("mongodb://%s:%s", host, port)))
	if err != nil {
		log.Fatal(err)
	}
	return &service{
		db: client,
	}
}

// Health pings the server and reports whether it answered.
func (s *service) Health() map[string]string {
	ctx, cancel := context.WithTimeout(context.Background(), 1*time.Second)
	defer cancel()

	err := s.db.Ping(ctx, nil)
	if err != nil {
		return map[string]string{"status": "down", "error": fmt.Sprintf("db down: %v", err)}
	}

	return map[string]string{"status": "up", "message": "It's healthy"}
}

// Close disconnects the client.
func (s *service) Close() error {
	return s.db.Disconnect(context.Background())
}
"#;

/// `.env` lines for `MongoDB`
pub const MONGO_ENV: &str = r"BLUEPRINT_DB_HOST={DatabaseHost}
BLUEPRINT_DB_PORT={DatabasePort}
BLUEPRINT_DB_USERNAME=melkey
BLUEPRINT_DB_ROOT_PASSWORD=password1234
";

/// Compose service for `MongoDB`
pub const MONGO_COMPOSE: &str = r#"mongo_bp:
  image: mongo:latest
  restart: unless-stopped
  environment:
    MONGO_INITDB_ROOT_USERNAME: ${BLUEPRINT_DB_USERNAME}
    MONGO_INITDB_ROOT_PASSWORD: ${BLUEPRINT_DB_ROOT_PASSWORD}
  ports:
    - "${BLUEPRINT_DB_PORT}:27017"
  volumes:
    - ./.data/mongo:/data/db
"#;

/// Testcontainers suite for `MongoDB`
pub const MONGO_INTEGRATION_TEST: &str = r#"package database

import (
	"context"
	"log"
	"testing"

	"github.com/testcontainers/testcontainers-go/modules/mongodb"
)

func mustStartMongoContainer() (func(context.Context) error, error) {
	dbContainer, err := mongodb.Run(context.Background(), "mongo:latest")
	if err != nil {
		return nil, err
	}

	dbHost, err := dbContainer.Host(context.Background())
	if err != nil {
		return dbContainer.Terminate, err
	}

	dbPort, err := dbContainer.MappedPort(context.Background(), "27017/tcp")
	if err != nil {
		return dbContainer.Terminate, err
	}

	host = dbHost
	port = dbPort.Port()

	return dbContainer.Terminate, err
}

func TestMain(m *testing.M) {
	teardown, err := mustStartMongoContainer()
	if err != nil {
		log.Fatalf("could not start mongodb container: %v", err)
	}

	m.Run()

	if teardown != nil && teardown(context.Background()) != nil {
		log.Fatalf("could not teardown mongodb container: %v", err)
	}
}

func TestHealth(t *testing.T) {
	srv := New()

	stats := srv.Health()

	if stats["status"] != "up" {
		t.Fatalf("expected status to be up, got %s", stats["status"])
	}
}
"#;

/// `internal/database/database.go` for Redis
pub const REDIS_SERVICE: &str = r#"package database

import (
	"context"
	"fmt"
	"log"
	"os"
	"strconv"
	"time"

	_ "github.com/joho/godotenv/autoload"
	"github.com/redis/go-redis/v9"
)

// Service represents a service that interacts with a database.
type Service interface {
	// Health returns a map of health status information.
	Health() map[string]string

	// Close terminates the database connection.
	Close() error
}

type service struct {
	db *redis.Client
}

var (
	address  = os.Getenv("BLUEPRINT_DB_ADDRESS")
	port     = os.Getenv("BLUEPRINT_DB_PORT")
	password = os.Getenv("BLUEPRINT_DB_PASSWORD")
	database = os.Getenv("BLUEPRINT_DB_DATABASE")
)

func New() Service {
	num, err := strconv.Atoi(database)
	if err != nil {
		log.Fatalf("database incorrect %v", err)
	}

	fullAddress := fmt.Sprintf("%s:%s", address, port)

	rdb := redis.NewClient(&redis.Options{
		Addr:     fullAddress,
		Password: password,
		DB:       num,
	})

	return &service{db: rdb}
}

// Health pings the server and reports whether it answered.
func (s *service) Health() map[string]string {
	ctx, cancel := context.WithTimeout(context.Background(), 5*time.Second)
	defer cancel()

	pong, err := s.db.Ping(ctx).Result()
	if err != nil {
		return map[string]string{"redis_status": "down", "redis_message": fmt.Sprintf("db down: %v", err)}
	}

	return map[string]string{"redis_status": "up", "redis_message": "It's healthy", "redis_ping_response": pong}
}

// Close closes the client.
func (s *service) Close() error {
	return s.db.Close()
}
"#;

/// `.env` lines for Redis
pub const REDIS_ENV: &str = r"BLUEPRINT_DB_ADDRESS={DatabaseHost}
BLUEPRINT_DB_PORT={DatabasePort}
BLUEPRINT_DB_PASSWORD=
BLUEPRINT_DB_DATABASE=0
";

/// Compose service for Redis
pub const REDIS_COMPOSE: &str = r#"redis_bp:
  image: redis:7.2.4
  restart: unless-stopped
  ports:
    - "${BLUEPRINT_DB_PORT}:6379"
"#;

/// Testcontainers suite for Redis
pub const REDIS_INTEGRATION_TEST: &str = r#"package database

import (
	"context"
	"log"
	"testing"

	"github.com/testcontainers/testcontainers-go/modules/redis"
)

func mustStartRedisContainer() (func(context.Context) error, error) {
	dbContainer, err := redis.Run(context.Background(), "docker.io/redis:7.2.4")
	if err != nil {
		return nil, err
	}

	dbHost, err := dbContainer.Host(context.Background())
	if err != nil {
		return dbContainer.Terminate, err
	}

	dbPort, err := dbContainer.MappedPort(context.Background(), "6379/tcp")
	if err != nil {
		return dbContainer.Terminate, err
	}

	address = dbHost
	port = dbPort.Port()
	database = "0"

	return dbContainer.Terminate, err
}

func TestMain(m *testing.M) {
	teardown, err := mustStartRedisContainer()
	if err != nil {
		log.Fatalf("could not start redis container: %v", err)
	}

	m.Run()

	if teardown != nil && teardown(context.Background()) != nil {
		log.Fatalf("could not teardown redis container: %v", err)
	}
}

func TestHealth(t *testing.T) {
	srv := New()

	stats := srv.Health()

	if stats["redis_status"] != "up" {
		t.Fatalf("expected status to be up, got %s", stats["redis_status"])
	}
}
"#;

/// `internal/database/database.go` for `ScyllaDB`
pub const SCYLLA_SERVICE: &str = r#"package database

import (
	"fmt"
	"log"
	"os"
	"strings"

	"github.com/gocql/gocql"
	_ "github.com/joho/godotenv/autoload"
)

// Service represents a service that interacts with a database.
type Service interface {
	// Health returns a map of health status information.
	Health() map[string]string

	// Close terminates the database connection.
	Close() error
}

type service struct {
	Session *gocql.Session
}

var (
	hosts       = os.Getenv("BLUEPRINT_DB_HOSTS")
	consistency = os.Getenv("BLUEPRINT_DB_CONSISTENCY")
)

func New() Service {
	cluster := gocql.NewCluster(strings.Split(hosts, ",")...)
	cluster.Consistency = gocql.ParseConsistency(consistency)

	session, err := cluster.CreateSession()
	if err != nil {
		log.Fatalf("failed to connect to database: %v", err)
	}

	return &service{Session: session}
}

// Health runs a trivial query and reports whether it succeeded.
func (s *service) Health() map[string]string {
	var release string
	if err := s.Session.Query("SELECT release_version FROM system.local").Scan(&release); err != nil {
		return map[string]string{"status": "down", "error": fmt.Sprintf("db down: %v", err)}
	}

	return map[string]string{"status": "up", "message": "It's healthy", "release_version": release}
}

// Close closes the session.
func (s *service) Close() error {
	s.Session.Close()
	return nil
}
"#;

/// `.env` lines for `ScyllaDB`
pub const SCYLLA_ENV: &str = r"BLUEPRINT_DB_HOSTS={DatabaseHost}:{DatabasePort}
BLUEPRINT_DB_CONSISTENCY=LOCAL_QUORUM
";

/// Compose service for `ScyllaDB`
pub const SCYLLA_COMPOSE: &str = r#"scylla_bp:
  image: scylladb/scylla:6.2
  restart: unless-stopped
  command:
    - --smp=2
    - --memory=1GB
    - --overprovisioned=1
    - --developer-mode=1
  ports:
    - "9042:9042"
  volumes:
    - ./.data/scylla:/var/lib/scylla
"#;
