//! 座位分配存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::allocator::{RoomSlot, plan_seats};
use crate::entity::exams::Entity as Exams;
use crate::entity::rooms::{Column as RoomColumn, Entity as Rooms};
use crate::entity::seat_assignments::{ActiveModel, Column, Entity as SeatAssignments};
use crate::entity::student_exams::{Column as RegistrationColumn, Entity as StudentExams};
use crate::entity::students::Entity as Students;
use crate::errors::{Result, SeaterError};
use crate::models::seating::{
    entities::SeatAssignment,
    responses::{RoomSeating, SeatView, SeatingResult},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{info, warn};

impl SeaOrmStorage {
    /// 为考试重新分配座位
    ///
    /// 整个过程在一个事务中完成：删除旧座位、按容量降序填充考场、写入新座位。
    /// 容量不足时剩余学生不分配座位，通过结果中的 unseated 返回。
    pub async fn assign_seats_impl(&self, exam_id: i64) -> Result<SeatingResult> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SeaterError::from_db("开启事务失败", e))?;

        let exam = Exams::find_by_id(exam_id)
            .one(&txn)
            .await
            .map_err(|e| SeaterError::from_db("查询考试失败", e))?;
        if exam.is_none() {
            return Err(SeaterError::not_found(format!("Exam {exam_id} not found")));
        }

        // 报名顺序即报名记录的创建顺序；学生信息随报名记录一并连表取出
        let registered = StudentExams::find()
            .find_also_related(Students)
            .filter(RegistrationColumn::ExamId.eq(exam_id))
            .order_by_asc(RegistrationColumn::Id)
            .all(&txn)
            .await
            .map_err(|e| SeaterError::from_db("查询报名记录失败", e))?;

        let student_ids: Vec<i64> = registered.iter().map(|(reg, _)| reg.student_id).collect();
        let mut students: HashMap<i64, _> = registered
            .into_iter()
            .filter_map(|(_, student)| student)
            .map(|s| (s.id, s))
            .collect();

        if student_ids.is_empty() {
            return Err(SeaterError::validation("no registrations for exam"));
        }

        SeatAssignments::delete_many()
            .filter(Column::ExamId.eq(exam_id))
            .exec(&txn)
            .await
            .map_err(|e| SeaterError::from_db("清除旧座位失败", e))?;

        // 同容量考场按 ID 升序
        let rooms = Rooms::find()
            .order_by_desc(RoomColumn::Capacity)
            .order_by_asc(RoomColumn::Id)
            .all(&txn)
            .await
            .map_err(|e| SeaterError::from_db("查询考场列表失败", e))?;

        let slots: Vec<RoomSlot> = rooms
            .iter()
            .map(|r| RoomSlot {
                room_id: r.id,
                capacity: r.capacity,
            })
            .collect();
        let plan = plan_seats(&student_ids, &slots);

        let now = chrono::Utc::now().timestamp();
        for placement in &plan.placements {
            let model = ActiveModel {
                exam_id: Set(exam_id),
                room_id: Set(placement.room_id),
                student_id: Set(placement.student_id),
                seat_number: Set(placement.seat_number),
                assigned_at: Set(now),
                ..Default::default()
            };
            model
                .insert(&txn)
                .await
                .map_err(|e| SeaterError::from_db("写入座位失败", e))?;
        }

        txn.commit()
            .await
            .map_err(|e| SeaterError::from_db("提交事务失败", e))?;

        // 按考场顺序组装座位表，只包含实际分配了学生的考场
        let mut layout: Vec<RoomSeating> = Vec::new();
        for placement in &plan.placements {
            let Some(student) = students.remove(&placement.student_id) else {
                continue;
            };
            if layout.last().map(|r| r.room_id) != Some(placement.room_id) {
                let Some(room) = rooms.iter().find(|r| r.id == placement.room_id) else {
                    continue;
                };
                layout.push(RoomSeating {
                    room_id: room.id,
                    room_code: room.room_code.clone(),
                    capacity: room.capacity,
                    seats: Vec::new(),
                });
            }
            if let Some(current) = layout.last_mut() {
                current.seats.push(SeatView {
                    seat_number: placement.seat_number,
                    student: student.into_seated_student(),
                });
            }
        }

        let total = student_ids.len();
        let seated = plan.seated_count();
        let unseated = plan.unseated_count();
        let warning = if unseated > 0 {
            warn!(
                "Exam {}: not enough seats, {} of {} students unseated",
                exam_id, unseated, total
            );
            Some(format!("Not enough seats. {unseated} unseated"))
        } else {
            None
        };

        info!(
            "Exam {}: seated {} students across {} rooms",
            exam_id,
            seated,
            layout.len()
        );

        Ok(SeatingResult {
            exam_id,
            total,
            seated,
            unseated,
            warning,
            rooms: layout,
        })
    }

    /// 列出某场考试的座位
    pub async fn list_seat_assignments_impl(
        &self,
        exam_id: i64,
        room_id: Option<i64>,
    ) -> Result<Vec<SeatAssignment>> {
        let mut select = SeatAssignments::find().filter(Column::ExamId.eq(exam_id));

        if let Some(room_id) = room_id {
            select = select.filter(Column::RoomId.eq(room_id));
        }

        let seats = select
            .order_by_asc(Column::RoomId)
            .order_by_asc(Column::SeatNumber)
            .all(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("查询座位失败", e))?;

        Ok(seats.into_iter().map(|m| m.into_seat_assignment()).collect())
    }

    /// 清空所有座位
    pub async fn clear_seat_assignments_impl(&self) -> Result<u64> {
        let result = SeatAssignments::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| SeaterError::from_db("清空座位失败", e))?;

        Ok(result.rows_affected)
    }
}
