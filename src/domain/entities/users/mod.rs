//! 인증 계정 엔티티
//!
//! 로컬(이메일/패스워드)과 OAuth 가입을 하나의 [`User`]로 표현합니다.
//! 저장된 계정의 ObjectId hex가 프로필의 `identity_id` 키가 됩니다.
//!
//! ```rust,ignore
//! let local = User::new_local(email, username, display_name, password_hash);
//! let social = User::new_oauth(email, username, display_name,
//!                              AuthProvider::Google, provider_user_id, picture);
//! ```

pub mod user;

pub use user::User;
