/// 业务服务层

pub mod metrics_service;
