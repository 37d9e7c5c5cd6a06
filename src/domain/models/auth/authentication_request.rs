//! 인증 미들웨어의 동작 모드와 역할 요구사항
//!
//! Spring Security의 `permitAll()` / `hasAnyRole()`에 대응하는 설정값입니다.

/// 인증 모드를 정의하는 열거형
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// 인증이 반드시 필요함
    Required,
    /// 인증이 선택사항임 (있으면 검증, 없어도 허용)
    Optional,
}

/// 접근에 필요한 역할 집합. 하나라도 겹치면 통과합니다 (OR 조건)
#[derive(Debug, Clone)]
pub struct RequiredRole {
    roles: Vec<String>,
}

impl RequiredRole {
    pub fn any_of(roles: Vec<String>) -> Self {
        Self { roles }
    }

    /// 사용자 역할이 요구사항을 만족하는지 확인
    pub fn is_satisfied(&self, user_roles: &[String]) -> bool {
        self.roles.iter().any(|role| user_roles.contains(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_overlap_satisfies() {
        let required = RequiredRole::any_of(vec!["user".to_string(), "admin".to_string()]);

        assert!(required.is_satisfied(&["admin".to_string()]));
        assert!(!required.is_satisfied(&["guest".to_string()]));
    }

    #[test]
    fn test_empty_roles_never_satisfy() {
        let required = RequiredRole::any_of(vec!["user".to_string()]);
        let no_roles: Vec<String> = vec![];

        assert!(!required.is_satisfied(&no_roles));
    }
}
