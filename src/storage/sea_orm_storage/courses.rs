//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{Result, SeaterError};
use crate::models::courses::entities::Course;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出全部课程
    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let courses = Courses::find()
            .order_by_asc(Column::Code)
            .all(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("查询课程列表失败", e))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 课程不存在时创建一条简易课程记录
    pub(super) async fn ensure_course<C: ConnectionTrait>(
        conn: &C,
        code: &str,
        title: &str,
    ) -> Result<()> {
        let existing = Courses::find_by_id(code.to_string())
            .one(conn)
            .await
            .map_err(|e| SeaterError::from_db("查询课程失败", e))?;

        if existing.is_none() {
            let model = ActiveModel {
                code: Set(code.to_string()),
                title: Set(title.to_string()),
                credits: Set(None),
            };
            model
                .insert(conn)
                .await
                .map_err(|e| SeaterError::from_db("创建课程失败", e))?;
        }

        Ok(())
    }
}
