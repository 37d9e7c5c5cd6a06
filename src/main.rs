//! 프로필 서비스 실행 진입점
//!
//! 부팅 순서: 환경/로깅 → MongoDB/Redis 연결 → 싱글톤 초기화 →
//! 인덱스 보장 → 보존 정리 작업 기동 → HTTP 서버. 서버가 내려가면
//! 정리 작업도 함께 멈춥니다.

use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use profile_service_backend::caching::redis::RedisClient;
use profile_service_backend::config::{RetentionConfig, ServerConfig};
use profile_service_backend::core::registry::ServiceLocator;
use profile_service_backend::db::Database;
use profile_service_backend::repositories::profiles::profile_repo::ProfileRepository;
use profile_service_backend::repositories::users::user_repo::UserRepository;
use profile_service_backend::routes::configure_all_routes;
use profile_service_backend::services::retention::{PurgeJob, PurgeJobHandle, SystemClock};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 프로필 서비스 시작중...");

    let (database, redis_client) = initialize_data_stores().await;

    ServiceLocator::set(database);
    ServiceLocator::set(redis_client);

    ServiceLocator::initialize_all()
        .await
        .expect("서비스 초기화 실패");

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    ensure_indexes().await;

    // 보존 정리 작업은 싱글톤이 아니라 소유 핸들로 관리
    let purge_handle = start_purge_job();

    let result = start_http_server().await;

    purge_handle.stop();

    result
}

/// PROFILE 환경 변수(prod/dev)에 맞는 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
            return;
        }
    };

    match dotenv::from_filename(filename) {
        Ok(_) => info!("{} 파일 로드 됨", filename),
        Err(e) => error!("{} 파일 로드 실패: {}", filename, e),
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB와 Redis 연결 초기화. 둘 중 하나라도 실패하면 부팅 중단
async fn initialize_data_stores() -> (Arc<Database>, Arc<RedisClient>) {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(Database::new().await.expect("데이터베이스 연결 실패"));
    let redis_client = Arc::new(RedisClient::new().await.expect("Redis 연결 실패"));

    (database, redis_client)
}

/// MongoDB 인덱스 보장
///
/// 실패해도 서버 기동은 계속합니다. 인덱스가 없으면 조회 성능만 저하됩니다.
async fn ensure_indexes() {
    if let Err(e) = UserRepository::instance().create_indexes().await {
        error!("⚠️ users 인덱스 생성 실패: {}", e);
    }
    if let Err(e) = ProfileRepository::instance().create_indexes().await {
        error!("⚠️ profiles 인덱스 생성 실패: {}", e);
    }
}

/// 보존 정리 작업 시작
///
/// 주기와 유예 기간은 환경 변수로 조정합니다
/// (RETENTION_GRACE_DAYS, PURGE_INTERVAL_SECS).
fn start_purge_job() -> PurgeJobHandle {
    let job = PurgeJob::new(
        ProfileRepository::instance(),
        Arc::new(SystemClock),
        RetentionConfig::grace_period(),
    );

    job.start(Duration::from_secs(RetentionConfig::purge_interval_secs()))
}

async fn start_http_server() -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let per_second = env_u64("RATE_LIMIT_PER_SECOND", 100);
    let burst_size = env_u64("RATE_LIMIT_BURST_SIZE", 200) as u32;

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(per_second)
        .burst_size(burst_size)
        .use_headers()
        .finish()
        .unwrap();

    info!("🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개", per_second, burst_size);

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4)
        .run()
        .await
}

/// 로컬 프론트엔드 개발 서버를 허용하는 CORS 설정
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_else(|| {
            info!("{} 미설정, 기본값 {} 사용", key, default);
            default
        })
}
