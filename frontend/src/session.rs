//! 会话状态机 - 领域模型
//!
//! 纯逻辑层：不依赖信号、存储或网络。`Session` 用枚举表达
//! "匿名 / 已认证" 两种状态，使 "已认证但缺少用户或令牌" 的
//! 不一致状态在类型上不可表达；三个持久化字段永远作为一个
//! 整体变化。

use std::sync::atomic::{AtomicU64, Ordering};
use vitalsfirst_shared::{Role, SessionSnapshot, User};

/// 进程内的认证会话
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    /// 无用户、无令牌
    #[default]
    Anonymous,
    /// 用户与 Bearer 令牌成对存在
    Authenticated { user: User, token: String },
}

impl Session {
    pub fn authenticated(user: User, token: String) -> Self {
        Session::Authenticated { user, token }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated { user, .. } => Some(user),
            Session::Anonymous => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token, .. } => Some(token),
            Session::Anonymous => None,
        }
    }

    /// 从持久化快照恢复。只接受一致的快照：
    /// 标志位为真且用户、令牌同时存在；其余一律视为无会话。
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Option<Session> {
        match snapshot {
            SessionSnapshot {
                user: Some(user),
                token: Some(token),
                is_authenticated: true,
            } => Some(Session::Authenticated { user, token }),
            _ => None,
        }
    }

    /// 导出持久化快照，三个字段整体写出。
    pub fn to_snapshot(&self) -> SessionSnapshot {
        match self {
            Session::Authenticated { user, token } => SessionSnapshot {
                user: Some(user.clone()),
                token: Some(token.clone()),
                is_authenticated: true,
            },
            Session::Anonymous => SessionSnapshot {
                user: None,
                token: None,
                is_authenticated: false,
            },
        }
    }
}

/// 登录请求序列
///
/// 每次登录尝试领取一个递增代号；只有仍是最新代号的结果才会
/// 被采纳，过期的成功响应直接丢弃。快速重复提交因此不再产生
/// "后发先至" 的竞态。UI 为单线程事件循环，Relaxed 序足够。
#[derive(Debug, Default)]
pub struct LoginSequence {
    latest: AtomicU64,
}

impl LoginSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// 开始一次新的登录尝试，返回其代号
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// 判断代号是否仍是最新一次尝试
    pub fn is_current(&self, generation: u64) -> bool {
        self.latest.load(Ordering::Relaxed) == generation
    }
}

#[cfg(test)]
mod tests;
