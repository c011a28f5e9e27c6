// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use crate::rules::Outcome;

const FORMAT_HINT: &str = "正确格式: <type>(<scope>): <subject>\n\
                           \n\
                           <body>";

pub(super) fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Validated => "提交信息校验通过。".to_string(),
        Outcome::Merge => "检测到合并提交，跳过校验。".to_string(),
        Outcome::ArgumentMissing => "缺少提交信息文件参数。用法: commit-msg <FILE>".to_string(),
        Outcome::FileMissing { path } => format!("提交信息文件不存在: {}", path.display()),
        Outcome::ReadError { path } => format!("读取提交信息文件失败: {}", path.display()),
        Outcome::EmptyMessage => "提交信息为空。".to_string(),
        Outcome::EmptyHeader => "提交信息标题为空。".to_string(),
        Outcome::BadHeaderFormat { header } => {
            format!("提交信息标题格式错误:\n\n    {}\n\n{}", header, FORMAT_HINT)
        }
        Outcome::WrongType {
            commit_type,
            allowed,
        } => format!(
            "不允许的提交类型 '{}'。可用类型: {}",
            commit_type, allowed
        ),
        Outcome::BodyMissing => "提交信息缺少正文。".to_string(),
        Outcome::NoBlankLineBeforeBody => "标题和正文之间必须有且仅有一个空行。".to_string(),
        Outcome::LineOverLong {
            length,
            limit,
            line,
        } => format!(
            "该行长度为 {} 字节，超过上限 {}:\n\n    {}",
            length, limit, line
        ),
    }
}
