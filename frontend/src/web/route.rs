//! 路由定义模块 - 领域模型
//!
//! 纯业务逻辑层，不依赖 DOM 或 web_sys。定义应用的所有路由、
//! 每条路由允许的角色集合，以及守卫判定本身。

use crate::session::Session;
use vitalsfirst_shared::Role;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 公共首页（角色入口，默认路由）
    #[default]
    Landing,
    /// 按角色区分的登录页
    Login(Role),
    /// 病人自助注册
    RegisterPatient,
    /// 预约挂号（仅病人）
    BookAppointment,
    /// 护士工作台
    Nurse,
    /// 医生工作台
    Doctor,
    /// 管理员工作台
    Administrator,
    /// 管理员 - 人员管理
    AdministratorStaff,
    /// 病人工作台
    Patient,
    /// 页面未找到
    NotFound,
}

/// 守卫判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// 渲染路由内容
    Allow,
    /// 重定向到公共首页（未认证与角色不符同样处理）
    RedirectToLanding,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let trimmed = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        match trimmed {
            "/" | "" => Self::Landing,
            "/register/patient" => Self::RegisterPatient,
            "/book-appointment" => Self::BookAppointment,
            "/nurse" => Self::Nurse,
            "/doctor" => Self::Doctor,
            "/administrator" => Self::Administrator,
            "/administrator/staff" => Self::AdministratorStaff,
            "/patient" => Self::Patient,
            _ => match trimmed.strip_prefix("/login/") {
                Some(segment) => Role::parse(segment).map(Self::Login).unwrap_or(Self::NotFound),
                None => Self::NotFound,
            },
        }
    }

    /// 路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Login(role) => format!("/login/{}", role),
            Self::RegisterPatient => "/register/patient".to_string(),
            Self::BookAppointment => "/book-appointment".to_string(),
            Self::Nurse => "/nurse".to_string(),
            Self::Doctor => "/doctor".to_string(),
            Self::Administrator => "/administrator".to_string(),
            Self::AdministratorStaff => "/administrator/staff".to_string(),
            Self::Patient => "/patient".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// 路由的允许角色集合；`None` 表示公共路由
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Self::Nurse => Some(&[Role::Nurse]),
            Self::Doctor => Some(&[Role::Doctor]),
            Self::Administrator | Self::AdministratorStaff => Some(&[Role::Administrator]),
            Self::Patient | Self::BookAppointment => Some(&[Role::Patient]),
            Self::Landing | Self::Login(_) | Self::RegisterPatient | Self::NotFound => None,
        }
    }

    pub fn requires_auth(&self) -> bool {
        self.allowed_roles().is_some()
    }

    /// **核心守卫判定**：会话必须已认证且角色在允许集合内。
    /// 每次导航与每次渲染都重新判定，不做缓存。
    pub fn access_for(&self, session: &Session) -> RouteAccess {
        let Some(allowed) = self.allowed_roles() else {
            return RouteAccess::Allow;
        };

        match session.role() {
            Some(role) if allowed.contains(&role) => RouteAccess::Allow,
            _ => RouteAccess::RedirectToLanding,
        }
    }

    /// 各角色登录后进入的工作台
    pub fn dashboard_for(role: Role) -> AppRoute {
        match role {
            Role::Nurse => AppRoute::Nurse,
            Role::Doctor => AppRoute::Doctor,
            Role::Administrator => AppRoute::Administrator,
            Role::Patient => AppRoute::Patient,
        }
    }

    /// 守卫拒绝时的重定向目标
    pub fn guard_redirect() -> AppRoute {
        AppRoute::Landing
    }
}

impl std::fmt::Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests;
