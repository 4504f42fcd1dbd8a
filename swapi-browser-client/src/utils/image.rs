//! 占位图片地址
//!
//! 图片服务以记录名称作为随机种子，不按内容寻址：
//! 同名记录总是得到同一张图片。

/// 占位图片服务地址
pub const PLACEHOLDER_IMAGE_BASE: &str = "https://picsum.photos/200";

/// 根据名称生成占位图片地址
pub fn placeholder_image_url(name: &str) -> String {
    format!(
        "{PLACEHOLDER_IMAGE_BASE}?random={}",
        urlencoding::encode(name)
    )
}
