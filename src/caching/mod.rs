//! 캐싱 계층
//!
//! Redis 백엔드의 JSON 객체 캐시입니다. 리포지토리들이 조회 캐시와
//! 쓰기 후 무효화에 사용하며, 연결 주소는 `REDIS_URL`
//! (기본 `redis://localhost:6379`)로 지정합니다.

pub mod redis;
