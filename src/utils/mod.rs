//! 공통 유틸리티
//!
//! [`display_terminal`]은 서비스 레지스트리 초기화 로그의 박스/트리
//! 출력을 담당합니다.

pub mod display_terminal;
