//! # 도메인 엔티티
//!
//! MongoDB 컬렉션과 1:1로 대응되는 영속 구조체입니다. Spring JPA의
//! `@Entity` 자리에 `serde` + `bson` 직렬화가 옵니다.
//!
//! - [`users`]: 인증 계정 (`users` 컬렉션)
//! - [`profiles`]: 반정형 사용자 프로필 (`profiles` 컬렉션)
//!
//! 두 엔티티는 직접 참조하지 않고 ID로만 연결됩니다. Profile이 User의
//! ObjectId hex를 `identity_id`로 들고 있어, 인증 계층을 통째로 바꿔도
//! 프로필 저장소는 영향을 받지 않습니다.

pub mod users;
pub mod profiles;
